use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sawt")]
#[command(about = "Sign in to or create a Sawt account from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with email and password and print the profile
    Login {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password (falls back to SAWT_PASSWORD)
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
    },
    /// Create an account and its starting profile
    Signup {
        /// Account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Display name
        #[arg(long, value_name = "NAME")]
        name: String,
        /// Account password (falls back to SAWT_PASSWORD)
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
    },
    /// Inspect client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show resolved configuration with the API key redacted
    Show,
}
