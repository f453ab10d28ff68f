//! Terminal registry

mod registry;

pub use registry::TerminalRegistry;

/// Display name of the terminal every exrunner command is sent to.
pub const TERMINAL_NAME: &str = "Elixir Refactorings";
