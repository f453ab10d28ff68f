//! Configuration management for exrunner

mod settings;

pub use settings::{CONFIG_FILE_NAMES, EXACTO_KNIFE_COMMAND_ENV, EXUNIT_COMMAND_ENV, Settings};
