//! Host implementations
//!
//! `ShellTerminal` runs commands for real; the recording terminal and the
//! scripted editor stand in for a host when driving the dispatcher
//! without one.

mod recording_terminal;
mod scripted_editor;
mod shell_terminal;

pub use recording_terminal::{RecordingTerminal, RecordingTerminalFactory, TerminalEvent, TerminalLog};
pub use scripted_editor::ScriptedEditor;
pub use shell_terminal::{ShellTerminal, ShellTerminalFactory};
