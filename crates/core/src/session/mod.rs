//! Command execution and per-session state

mod executor;
mod state;

pub use executor::{NO_LAST_COMMAND, Session};
pub use state::SessionState;
