//! State behind the "Add Queue" and "Queue YAML" dialogs
//!
//! The web UI drives one of these per open dialog. It captures the uploaded
//! file, toggles between the highlighted view and the text editor, and turns
//! "apply" into a notice the UI shows as a toast.

use crate::highlight::format_yaml;
use crate::queue::{queue_name_for, QueueRegistry, UploadedFile};
use tracing::{debug, info, warn};

pub const APPLY_SUCCESS: &str = "Queue added successfully!";
pub const APPLY_EMPTY: &str = "YAML content cannot be empty!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    /// Uploading a brand new queue definition
    Add,
    /// Viewing and editing an existing queue
    Edit { queue_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone)]
pub struct QueueDialog {
    mode: DialogMode,
    open: bool,
    file_name: Option<String>,
    yaml: Option<String>,
    formatted: Option<String>,
    editing: bool,
    dragging: bool,
    notice: Option<Notice>,
}

impl QueueDialog {
    pub fn open_add() -> Self {
        Self {
            mode: DialogMode::Add,
            open: true,
            file_name: None,
            yaml: None,
            formatted: None,
            editing: false,
            dragging: false,
            notice: None,
        }
    }

    /// Open an existing queue; its YAML is highlighted right away
    pub fn open_edit(queue_name: &str, yaml: &str) -> Self {
        Self {
            mode: DialogMode::Edit {
                queue_name: queue_name.to_string(),
            },
            open: true,
            file_name: None,
            yaml: Some(yaml.to_string()),
            formatted: Some(format_yaml(yaml)),
            editing: false,
            dragging: false,
            notice: None,
        }
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn yaml(&self) -> Option<&str> {
        self.yaml.as_deref()
    }

    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn upload_file(&mut self, file: UploadedFile) {
        debug!(
            "Dialog received file {} ({} bytes)",
            file.file_name,
            file.content.len()
        );
        self.formatted = Some(format_yaml(&file.content));
        self.file_name = Some(file.file_name);
        self.yaml = Some(file.content);
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// A drop always ends the drag; only the first file is taken
    pub fn drop_file(&mut self, file: Option<UploadedFile>) {
        self.dragging = false;
        if let Some(file) = file {
            self.upload_file(file);
        }
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Replace the working text. Ignored outside edit mode.
    pub fn set_text(&mut self, text: &str) {
        if self.editing {
            self.yaml = Some(text.to_string());
        }
    }

    /// Re-highlight the edited text and return to the read-only view
    pub fn save(&mut self) {
        self.formatted = self.yaml.as_deref().map(format_yaml);
        self.editing = false;
    }

    pub fn remove_file(&mut self) {
        self.file_name = None;
        self.yaml = None;
        self.formatted = None;
        self.editing = false;
    }

    /// Store the current YAML in the registry and report the outcome
    pub fn apply(&mut self, registry: &mut QueueRegistry) -> &Notice {
        let notice = match self.yaml.as_deref() {
            Some(yaml) if !yaml.trim().is_empty() => match self.target_name(yaml) {
                Ok(name) => match registry.upsert(&name, yaml) {
                    Ok(_) => {
                        info!("Applied queue {} from dialog", name);
                        Notice::Success(APPLY_SUCCESS.to_string())
                    }
                    Err(e) => {
                        warn!("Failed to apply queue {}: {}", name, e);
                        Notice::Error(e.to_string())
                    }
                },
                Err(message) => Notice::Error(message),
            },
            _ => Notice::Error(APPLY_EMPTY.to_string()),
        };
        self.notice.insert(notice)
    }

    fn target_name(&self, yaml: &str) -> Result<String, String> {
        match &self.mode {
            DialogMode::Edit { queue_name } => Ok(queue_name.clone()),
            DialogMode::Add => {
                let file_name = self
                    .file_name
                    .as_deref()
                    .ok_or_else(|| "No file selected".to_string())?;
                queue_name_for(&UploadedFile::new(file_name, yaml)).map_err(|e| e.to_string())
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Close the dialog. An edit dialog keeps its text for the caller.
    pub fn close(&mut self) {
        self.open = false;
        self.file_name = None;
        self.editing = false;
        if self.mode == DialogMode::Add {
            self.yaml = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml_file() -> UploadedFile {
        UploadedFile::new("jobs.yaml", "name: jobs\nworkers: 2\n")
    }

    #[test]
    fn test_upload_formats_content() {
        let mut dialog = QueueDialog::open_add();
        dialog.upload_file(yaml_file());

        assert_eq!(dialog.file_name(), Some("jobs.yaml"));
        assert_eq!(dialog.yaml(), Some("name: jobs\nworkers: 2\n"));
        assert_eq!(
            dialog.formatted(),
            Some(
                "<span class=\"yaml-key\">name</span>: jobs\n\
                 <span class=\"yaml-key\">workers</span>: 2\n"
            )
        );
    }

    #[test]
    fn test_edit_and_save() {
        let mut dialog = QueueDialog::open_add();
        dialog.upload_file(yaml_file());

        dialog.set_text("ignored: true");
        assert_eq!(dialog.yaml(), Some("name: jobs\nworkers: 2\n"));

        dialog.begin_edit();
        assert!(dialog.is_editing());
        dialog.set_text("name: jobs\nworkers: 8");
        dialog.save();

        assert!(!dialog.is_editing());
        assert_eq!(
            dialog.formatted(),
            Some("<span class=\"yaml-key\">name</span>: jobs\n<span class=\"yaml-key\">workers</span>: 8")
        );
    }

    #[test]
    fn test_drag_and_drop() {
        let mut dialog = QueueDialog::open_add();
        dialog.drag_over();
        assert!(dialog.is_dragging());
        dialog.drag_leave();
        assert!(!dialog.is_dragging());

        dialog.drag_over();
        dialog.drop_file(None);
        assert!(!dialog.is_dragging());
        assert_eq!(dialog.file_name(), None);

        dialog.drag_over();
        dialog.drop_file(Some(yaml_file()));
        assert!(!dialog.is_dragging());
        assert_eq!(dialog.file_name(), Some("jobs.yaml"));
    }

    #[test]
    fn test_apply_without_content() {
        let mut registry = QueueRegistry::new();
        let mut dialog = QueueDialog::open_add();

        let notice = dialog.apply(&mut registry).clone();
        assert_eq!(notice, Notice::Error(APPLY_EMPTY.to_string()));
        assert!(registry.is_empty());

        dialog.upload_file(UploadedFile::new("blank.yaml", "   \n"));
        assert!(dialog.apply(&mut registry).is_error());
    }

    #[test]
    fn test_apply_add_uses_document_name() {
        let mut registry = QueueRegistry::new();
        let mut dialog = QueueDialog::open_add();
        dialog.upload_file(yaml_file());

        let notice = dialog.apply(&mut registry);
        assert_eq!(notice.message(), APPLY_SUCCESS);
        assert!(registry.contains("jobs"));
    }

    #[test]
    fn test_apply_edit_replaces_queue() {
        let mut registry = QueueRegistry::new();
        registry.create("jobs", "workers: 1").unwrap();

        let mut dialog = QueueDialog::open_edit("jobs", "workers: 1");
        assert_eq!(
            dialog.formatted(),
            Some("<span class=\"yaml-key\">workers</span>: 1")
        );
        dialog.begin_edit();
        dialog.set_text("workers: 5");
        dialog.save();

        assert!(!dialog.apply(&mut registry).is_error());
        assert_eq!(registry.get("jobs").unwrap().yaml, "workers: 5");
    }

    #[test]
    fn test_apply_invalid_yaml_reports_error() {
        let mut registry = QueueRegistry::new();
        let mut dialog = QueueDialog::open_edit("jobs", "key: [unclosed");

        let notice = dialog.apply(&mut registry);
        assert!(notice.is_error());
        assert!(notice.message().starts_with("Invalid YAML"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_file_and_dismiss() {
        let mut registry = QueueRegistry::new();
        let mut dialog = QueueDialog::open_add();
        dialog.upload_file(yaml_file());
        dialog.begin_edit();
        dialog.remove_file();

        assert_eq!(dialog.file_name(), None);
        assert_eq!(dialog.yaml(), None);
        assert!(!dialog.is_editing());

        dialog.apply(&mut registry);
        assert!(dialog.notice().is_some());
        dialog.dismiss_notice();
        assert!(dialog.notice().is_none());
    }

    #[test]
    fn test_close_resets_per_mode() {
        let mut add = QueueDialog::open_add();
        add.upload_file(yaml_file());
        add.begin_edit();
        add.close();
        assert!(!add.is_open());
        assert_eq!(add.file_name(), None);
        assert_eq!(add.yaml(), None);
        assert!(!add.is_editing());

        let mut edit = QueueDialog::open_edit("jobs", "a: 1");
        edit.close();
        assert!(!edit.is_open());
        assert_eq!(edit.yaml(), Some("a: 1"));
        assert_eq!(
            edit.mode(),
            &DialogMode::Edit {
                queue_name: "jobs".to_string()
            }
        );
    }
}
