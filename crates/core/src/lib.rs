//! exrunner - run ExUnit tests and Elixir refactorings for the file you are editing
//!
//! This crate provides functionality to:
//! - Map files between a Mix project's `lib/` and `test/` trees
//! - Assemble test-runner and refactoring-tool command lines
//! - Send them to a named terminal and replay the last one
//!
//! The editor and the terminal are host traits (see [`interfaces`]), so the
//! same dispatcher serves an editor plugin, the CLI, and tests.
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interfaces;
pub mod paths;
pub mod services;
pub mod session;
pub mod terminal;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::Refactoring;
pub use config::Settings;
pub use dispatcher::{Action, dispatch};
pub use interfaces::{Editor, InputPrompt, Terminal, TerminalFactory};
pub use session::Session;
pub use terminal::{TERMINAL_NAME, TerminalRegistry};
