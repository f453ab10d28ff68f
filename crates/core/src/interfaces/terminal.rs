//! Terminal host interface

use crate::error::Result;

/// One shell session owned by the host.
pub trait Terminal {
    fn name(&self) -> &str;

    /// Submit a command line. Hosts that can observe the command's
    /// completion return its exit code; fire-and-forget hosts return `None`.
    fn send_text(&mut self, text: &str) -> Result<Option<i32>>;

    /// Bring the terminal into view.
    fn show(&mut self, preserve_focus: bool);

    fn clear(&mut self) -> Result<()>;

    /// Whether the user closed this session behind our back.
    fn is_closed(&self) -> bool {
        false
    }

    /// Release the session when the registry drops it.
    fn dispose(&mut self) {}
}

/// Creates terminals on demand for the registry.
pub trait TerminalFactory {
    fn create(&mut self, name: &str) -> Result<Box<dyn Terminal>>;
}
