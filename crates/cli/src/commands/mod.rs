pub mod action;
pub mod env;
pub mod init;

pub use action::{action_command, exit_code};
pub use env::env_command;
pub use init::init_command;
