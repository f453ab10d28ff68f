use crate::{
    error::Result,
    interfaces::{Editor, InputPrompt},
    types::{ActiveFile, Notification},
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// An editor whose state is set up front and whose side effects are kept
/// for inspection. Prompt replies are consumed in order; once they run
/// out, prompts behave as dismissed.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    root: Option<PathBuf>,
    active: Option<ActiveFile>,
    replies: VecDeque<Option<String>>,
    pub opened: Vec<PathBuf>,
    pub notifications: Vec<Notification>,
    pub prompts: Vec<InputPrompt>,
    pub saves: usize,
}

impl ScriptedEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_active_file(mut self, file: ActiveFile) -> Self {
        self.active = Some(file);
        self
    }

    /// Queue the answer to the next prompt; `None` dismisses it.
    pub fn with_reply(mut self, reply: Option<&str>) -> Self {
        self.replies.push_back(reply.map(str::to_string));
        self
    }

    pub fn set_active_file(&mut self, file: Option<ActiveFile>) {
        self.active = file;
    }
}

impl Editor for ScriptedEditor {
    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn active_file(&self) -> Option<ActiveFile> {
        self.active.clone()
    }

    fn save_active_document(&mut self) -> Result<()> {
        if self.active.is_some() {
            self.saves += 1;
        }
        Ok(())
    }

    fn open_file(&mut self, path: &Path) -> Result<()> {
        self.opened.push(path.to_path_buf());
        Ok(())
    }

    fn prompt_input(&mut self, prompt: &InputPrompt) -> Option<String> {
        self.prompts.push(prompt.clone());
        self.replies.pop_front().flatten()
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
