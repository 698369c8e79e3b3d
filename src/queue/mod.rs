//! Queue definitions managed through the admin UI
//!
//! This module provides:
//! - A registry of named YAML queue documents
//! - Upload handling for `.yaml` / `.yml` files
//! - Persistence to disk

pub mod registry;
pub mod storage;
pub mod upload;

pub use registry::{QueueDocument, QueueRegistry};
pub use storage::QueueStorage;
pub use upload::{queue_name_for, UploadedFile};

use anyhow::Result;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Invalid queue name: {0:?}")]
    InvalidName(String),
    #[error("YAML content cannot be empty!")]
    EmptyContent,
    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),
    #[error("Queue already exists: {0}")]
    AlreadyExists(String),
    #[error("Queue not found: {0}")]
    NotFound(String),
    #[error("Unsupported file (expected .yaml or .yml): {0}")]
    UnsupportedFile(String),
}

/// Shared registry instance
pub type SharedQueueRegistry = Arc<RwLock<QueueRegistry>>;

pub fn create_shared_registry() -> SharedQueueRegistry {
    Arc::new(RwLock::new(QueueRegistry::new()))
}

/// Load registry from storage
pub async fn load_from_storage(path: &str) -> Result<SharedQueueRegistry> {
    let storage = QueueStorage::new(path);
    let registry = storage.load().await?;
    Ok(Arc::new(RwLock::new(registry)))
}

/// Save registry to storage
pub async fn save_to_storage(registry: &SharedQueueRegistry, path: &str) -> Result<()> {
    let storage = QueueStorage::new(path);
    let snapshot = registry.read().await.clone();
    storage.save(&snapshot).await
}
