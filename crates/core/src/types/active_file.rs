use super::Position;
use std::path::PathBuf;

/// Snapshot of the focused editor: which file, where the selection starts,
/// and where the cursor sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFile {
    pub path: PathBuf,
    pub selection_start: Position,
    pub cursor: Position,
}

impl ActiveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            selection_start: Position::default(),
            cursor: Position::default(),
        }
    }

    /// Place both the selection start and the cursor at `position`.
    pub fn at(mut self, position: Position) -> Self {
        self.selection_start = position;
        self.cursor = position;
        self
    }

    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
