//! Editor host interface

use crate::{
    error::Result,
    types::{ActiveFile, Notification},
};
use std::path::{Path, PathBuf};

/// A free-text prompt shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrompt {
    pub place_holder: String,
    pub prompt: String,
    pub value: String,
}

impl InputPrompt {
    pub fn rename() -> Self {
        Self {
            place_holder: "Rename".to_string(),
            prompt: "Enter the new name".to_string(),
            value: String::new(),
        }
    }
}

/// The parts of an editor the dispatcher reads from and acts on.
pub trait Editor {
    /// Absolute path of the first workspace folder, if one is open.
    fn workspace_root(&self) -> Option<PathBuf>;

    /// The focused file, read fresh on every call.
    fn active_file(&self) -> Option<ActiveFile>;

    /// Persist the focused document before an external tool reads it.
    fn save_active_document(&mut self) -> Result<()>;

    /// Open `path` in the editor.
    fn open_file(&mut self, path: &Path) -> Result<()>;

    /// Ask the user for text. `None` means the prompt was dismissed.
    fn prompt_input(&mut self, prompt: &InputPrompt) -> Option<String>;

    fn notify(&mut self, notification: Notification);
}
