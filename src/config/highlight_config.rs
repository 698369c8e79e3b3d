use crate::highlight::{YamlHighlighter, DEFAULT_KEY_CLASS};
use serde::Deserialize;

/// Span class used when rendering queue YAML
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    #[serde(default = "default_key_class")]
    pub key_class: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            key_class: default_key_class(),
        }
    }
}

impl HighlightConfig {
    pub fn build(&self) -> YamlHighlighter {
        YamlHighlighter::with_class(&self.key_class)
    }
}

fn default_key_class() -> String {
    DEFAULT_KEY_CLASS.to_string()
}
