//! Host interfaces
//!
//! exrunner never talks to an editor or a shell directly. The host (an
//! editor plugin, the CLI, or a test double) implements these traits and
//! the dispatcher drives them.

pub mod editor;
pub mod terminal;

pub use editor::{Editor, InputPrompt};
pub use terminal::{Terminal, TerminalFactory};
