//! Queue persistence to JSON files

use super::QueueRegistry;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Handles registry persistence to disk
#[derive(Debug, Clone)]
pub struct QueueStorage {
    file_path: String,
}

impl QueueStorage {
    pub fn new(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
        }
    }

    /// Save registry state to file
    pub async fn save(&self, registry: &QueueRegistry) -> Result<()> {
        debug!("Saving queue state to: {}", self.file_path);

        let json = serde_json::to_string_pretty(registry)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = Path::new(&self.file_path).parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&self.file_path, json)
            .await
            .with_context(|| format!("Failed to write queue state: {}", self.file_path))?;
        info!(
            "Saved {} queues to: {}",
            registry.len(),
            self.file_path
        );

        Ok(())
    }

    /// Load registry state from file
    pub async fn load(&self) -> Result<QueueRegistry> {
        if !self.exists() {
            info!(
                "Queue state file not found, starting empty: {}",
                self.file_path
            );
            return Ok(QueueRegistry::new());
        }

        debug!("Loading queue state from: {}", self.file_path);

        let contents = fs::read_to_string(&self.file_path)
            .await
            .with_context(|| format!("Failed to read queue state: {}", self.file_path))?;
        let registry: QueueRegistry = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse queue state: {}", self.file_path))?;

        info!("Loaded {} queues from: {}", registry.len(), self.file_path);

        Ok(registry)
    }

    pub fn exists(&self) -> bool {
        Path::new(&self.file_path).exists()
    }

    /// Delete the storage file
    pub async fn delete(&self) -> Result<()> {
        if self.exists() {
            fs::remove_file(&self.file_path).await?;
            info!("Deleted queue state file: {}", self.file_path);
        }
        Ok(())
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}
