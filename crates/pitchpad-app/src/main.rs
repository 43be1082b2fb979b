//! PitchPad Desktop Application
//!
//! Browse the website designs you have saved from the PitchPad generator.

mod app;
mod components;
mod config;
mod queries;
mod services;
mod state;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pitchpad=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting PitchPad...");

    dioxus::launch(app::App);
}
