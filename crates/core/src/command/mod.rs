//! Shell line assembly
//!
//! Every command exrunner issues is a single line handed to a terminal.
//! The configured tool invocations are inserted verbatim, so an empty
//! setting produces a line with an empty leading segment rather than an error.

mod refactoring;

pub use refactoring::Refactoring;

use crate::types::Position;

/// `<runner> <test_path>`
pub fn test_file(runner: &str, test_path: &str) -> String {
    format!("{runner} {test_path}")
}

/// `<runner> <test_path>:<line>` where `line` is 1-based.
pub fn focused_test(runner: &str, test_path: &str, line: u32) -> String {
    format!("{runner} {test_path}:{line}")
}

/// `<tool> <refactoring> <file>`
pub fn refactor(tool: &str, refactoring: Refactoring, file: &str) -> String {
    format!("{tool} {} {file}", refactoring.tool_name())
}

/// `<tool> rename <file> <line> <column> <new_name>`, 1-based.
pub fn rename(tool: &str, file: &str, at: Position, new_name: &str) -> String {
    let (line, column) = at.one_based();
    format!("{tool} rename {file} {line} {column} {new_name}")
}
