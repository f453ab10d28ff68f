//! Host implementations for a terminal session

mod editor;
mod terminal;

pub use editor::CliEditor;
pub use terminal::{CliTerminalFactory, PrintTerminal};
