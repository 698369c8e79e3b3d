//! Registry of named YAML queue definitions

use super::QueueError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A single queue definition as uploaded or edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueDocument {
    pub name: String,
    pub yaml: String,
}

/// Holds queue definitions keyed by name, listed in name order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueRegistry {
    queues: BTreeMap<String, QueueDocument>,
}

impl QueueRegistry {
    pub fn new() -> Self {
        Self {
            queues: BTreeMap::new(),
        }
    }

    /// Add a new queue, failing if the name is already taken
    pub fn create(&mut self, name: &str, yaml: &str) -> Result<&QueueDocument, QueueError> {
        validate(name, yaml)?;

        if self.queues.contains_key(name) {
            return Err(QueueError::AlreadyExists(name.to_string()));
        }

        info!("Creating queue: {}", name);
        let document = QueueDocument {
            name: name.to_string(),
            yaml: yaml.to_string(),
        };
        Ok(self.queues.entry(name.to_string()).or_insert(document))
    }

    /// Insert or replace a queue. Returns true if it did not exist before.
    pub fn upsert(&mut self, name: &str, yaml: &str) -> Result<bool, QueueError> {
        validate(name, yaml)?;

        let document = QueueDocument {
            name: name.to_string(),
            yaml: yaml.to_string(),
        };
        let created = self.queues.insert(name.to_string(), document).is_none();
        if created {
            info!("Creating queue: {}", name);
        } else {
            info!("Updating queue: {}", name);
        }
        Ok(created)
    }

    pub fn get(&self, name: &str) -> Option<&QueueDocument> {
        self.queues.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }

    pub fn list(&self) -> Vec<&QueueDocument> {
        self.queues.values().collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.queues.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    pub fn remove(&mut self, name: &str) -> Result<QueueDocument, QueueError> {
        match self.queues.remove(name) {
            Some(document) => {
                info!("Deleted queue: {}", name);
                Ok(document)
            }
            None => Err(QueueError::NotFound(name.to_string())),
        }
    }
}

/// Reject blank names, blank content and text that does not parse as YAML
fn validate(name: &str, yaml: &str) -> Result<(), QueueError> {
    if name.trim().is_empty() || name.contains('/') {
        return Err(QueueError::InvalidName(name.to_string()));
    }
    if yaml.trim().is_empty() {
        return Err(QueueError::EmptyContent);
    }

    serde_yaml::from_str::<serde_yaml::Value>(yaml)
        .map_err(|e| QueueError::InvalidYaml(e.to_string()))?;
    debug!("Validated YAML for queue {}: {} bytes", name, yaml.len());
    Ok(())
}
