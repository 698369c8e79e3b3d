pub mod cli;
pub mod config;
pub mod dialog;
pub mod highlight;
pub mod queue;
pub mod web;

// Public API
pub use config::Config;
pub use dialog::{DialogMode, Notice, QueueDialog};
pub use highlight::{
    format_yaml, format_yaml_bytes, format_yaml_value, HighlightError, YamlHighlighter,
};
pub use queue::{
    QueueDocument, QueueError, QueueRegistry, QueueStorage, SharedQueueRegistry, UploadedFile,
};
pub use web::{AppState, WebServer};
