//! Uploaded YAML files and how they map onto queue names

use super::QueueError;
use serde::Deserialize;
use std::path::Path;

const ALLOWED_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// A file picked or dropped by the user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    pub file_name: String,
    pub content: String,
}

impl UploadedFile {
    pub fn new(file_name: &str, content: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            content: content.to_string(),
        }
    }
}

/// Only `.yaml` and `.yml` files are accepted
pub fn validate_extension(file_name: &str) -> Result<(), QueueError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(QueueError::UnsupportedFile(file_name.to_string())),
    }
}

/// Queue name for an upload: the document's top-level `name`, else the file stem
pub fn queue_name_for(file: &UploadedFile) -> Result<String, QueueError> {
    validate_extension(&file.file_name)?;

    if let Ok(serde_yaml::Value::Mapping(mapping)) =
        serde_yaml::from_str::<serde_yaml::Value>(&file.content)
    {
        if let Some(serde_yaml::Value::String(name)) = mapping.get("name") {
            if !name.trim().is_empty() {
                return Ok(name.trim().to_string());
            }
        }
    }

    Path::new(&file.file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| QueueError::InvalidName(file.file_name.clone()))
}
