use serde::Deserialize;

/// Where queue definitions are persisted; no path means in-memory only
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_config() {
        assert_eq!(StorageConfig::default().path, None);
    }

    #[test]
    fn test_storage_config_deserialization() {
        let config: StorageConfig = serde_yaml::from_str("path: data/queues.json").unwrap();
        assert_eq!(config.path.as_deref(), Some("data/queues.json"));
    }
}
