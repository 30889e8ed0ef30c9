use std::sync::Arc;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use llama_herder::app::{App, APP_TITLE};
use llama_herder::manager::ModelManager;
use llama_herder::types::config::HerderConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HerderConfig::default();
    tracing::info!("Starting Llama Herder against {}", config.base_url);

    let manager = match ModelManager::from_config(config) {
        Ok(manager) => Arc::new(manager),
        Err(e) => {
            tracing::error!("Failed to create Ollama client: {}", e);
            std::process::exit(1);
        }
    };

    let window = WindowBuilder::new()
        .with_title(APP_TITLE)
        .with_inner_size(LogicalSize::new(1000.0, 700.0))
        .with_min_inner_size(LogicalSize::new(800.0, 600.0));

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(manager)
        .launch(App);
}
