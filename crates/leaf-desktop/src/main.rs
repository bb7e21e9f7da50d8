//! Leaf Desktop Application
//!
//! A single window with the note form on top and the note list below.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod actions;
mod app;
mod components;
mod state;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("leaf=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting Leaf...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Leaf Notes"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
