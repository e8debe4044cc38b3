//! Sawt Desktop Application
//!
//! Sign-in and sign-up entry point for the Sawt voice-chat app.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sawt=debug")),
        )
        .init();

    tracing::info!("Starting Sawt...");

    let window = WindowBuilder::new()
        .with_title(sawt_core::messages::APP_TITLE)
        .with_inner_size(LogicalSize::new(440.0, 820.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
