//! Sawt CLI - sign in or create an account from the terminal

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::auth_cmd::{run_login, run_signup};
use crate::commands::config::run_config_show;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Login { email, password } => run_login(email, password, cli.json).await,
        Commands::Signup {
            email,
            name,
            password,
        } => run_signup(email, name, password, cli.json).await,
        Commands::Config {
            command: ConfigCommands::Show,
        } => run_config_show(cli.json),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "sawt=debug" } else { "sawt=info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}
