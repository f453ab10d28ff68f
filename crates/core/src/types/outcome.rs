use super::Notification;
use serde::Serialize;
use std::path::PathBuf;

/// A command line that reached a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execution {
    pub command: String,
    /// Exit code, when the terminal could observe one.
    pub exit_code: Option<i32>,
}

impl Execution {
    /// A command without an observable exit code counts as a success.
    pub fn success(&self) -> bool {
        self.exit_code.is_none_or(|code| code == 0)
    }
}

/// What the path resolver sees for the current editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvironmentReport {
    pub workspace_root: Option<PathBuf>,
    pub active_file: Option<PathBuf>,
    pub relative_path: Option<String>,
    pub test_path: Option<String>,
}

/// The observable result of one dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened(PathBuf),
    Executed(Execution),
    Notified(Notification),
    Reported(EnvironmentReport),
    /// The action did not apply; nothing happened.
    Nothing,
}
