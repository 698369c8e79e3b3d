use crate::config::Config;
use crate::queue::{self, create_shared_registry, QueueStorage};
use crate::web::{AppState, WebServer};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::signal;

/// Start the web server and run until Ctrl+C
pub async fn run_serve(config: &Config) -> Result<()> {
    if !config.web_ui.enabled {
        println!("💡 Web UI disabled in configuration");
        return Ok(());
    }

    let (registry, storage) = match &config.storage.path {
        Some(path) => (
            queue::load_from_storage(path)
                .await
                .context("Failed to load stored queues")?,
            Some(QueueStorage::new(path)),
        ),
        None => (create_shared_registry(), None),
    };

    let mut state = AppState::new(registry).with_highlighter(config.highlight.build());
    if let Some(storage) = storage {
        state = state.with_storage(storage);
    }

    println!("🎯 Queue admin started");
    println!(
        "🌐 Web UI available at: http://{}:{}",
        config.web_ui.host, config.web_ui.port
    );
    println!("🛑 Press Ctrl+C to stop");

    let web_server = WebServer::new(config.web_ui.port, config.web_ui.host.clone(), state);
    tokio::select! {
        result = web_server.start() => result?,
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl_c")?;
            println!("\n🛑 Received Ctrl+C, shutting down...");
        }
    }

    Ok(())
}

/// Highlight a YAML file and return the markup
pub fn format_file(path: &Path, config: &Config) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let formatted = config
        .highlight
        .build()
        .format_bytes(&bytes)
        .with_context(|| format!("Cannot format {}", path.display()))?;
    Ok(formatted)
}

pub async fn run_show(config: &Config) -> Result<()> {
    println!("Web UI config:");
    println!("  enabled: {}", config.web_ui.enabled);
    println!("  host: {}", config.web_ui.host);
    println!("  port: {}", config.web_ui.port);
    println!("\nHighlight config:");
    println!("  key_class: {}", config.highlight.key_class);

    match &config.storage.path {
        Some(path) => {
            println!("\nStorage: {}", path);
            let registry = QueueStorage::new(path)
                .load()
                .await
                .context("Failed to load stored queues")?;
            if registry.is_empty() {
                println!("  (no queues)");
            }
            for document in registry.list() {
                println!(
                    "  {}: {} lines",
                    document.name,
                    document.yaml.lines().count()
                );
            }
        }
        None => println!("\nStorage: in-memory"),
    }

    Ok(())
}
