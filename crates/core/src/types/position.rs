use serde::{Deserialize, Serialize};

/// A zero-based location in a document, as editors report selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Build a position from the 1-based line/column a user types.
    /// Zero is clamped to the first line or column.
    pub fn from_one_based(line: u32, column: u32) -> Self {
        Self {
            line: line.saturating_sub(1),
            character: column.saturating_sub(1),
        }
    }

    /// The 1-based `(line, column)` pair that external tools expect.
    pub fn one_based(&self) -> (u32, u32) {
        (self.line + 1, self.character + 1)
    }
}
