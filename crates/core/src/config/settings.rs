use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names, checked in this order at each directory level.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".exrunner.json", "exrunner.json"];

pub const EXUNIT_COMMAND_ENV: &str = "EXRUNNER_EXUNIT_COMMAND";
pub const EXACTO_KNIFE_COMMAND_ENV: &str = "EXRUNNER_EXACTO_KNIFE_COMMAND";

/// User settings. Both commands are inserted into shell lines as-is; an
/// unset command is an empty string, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Test runner invocation, e.g. `mix test`
    #[serde(default)]
    pub exunit_command: String,

    /// Refactoring tool invocation, e.g. `mix exacto_knife`
    #[serde(default)]
    pub exacto_knife_command: String,
}

impl Settings {
    /// The settings `exrunner init` writes.
    pub fn template() -> Self {
        Self {
            exunit_command: "mix test".to_string(),
            exacto_knife_command: "mix exacto_knife".to_string(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` to the first directory holding a config file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file above `start_path`, or defaults when
    /// there is none. Returns the file that was used alongside the settings.
    pub fn discover(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Ok((Self::load_from_file(&path)?, Some(path)))
            }
            None => {
                debug!("No config file above {}, using defaults", start_path.display());
                Ok((Self::default(), None))
            }
        }
    }

    /// Apply `EXRUNNER_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by the `EXRUNNER_*` variable names.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(EXUNIT_COMMAND_ENV) {
            debug!("{} overrides exunit-command", EXUNIT_COMMAND_ENV);
            self.exunit_command = value;
        }
        if let Some(value) = lookup(EXACTO_KNIFE_COMMAND_ENV) {
            debug!("{} overrides exacto-knife-command", EXACTO_KNIFE_COMMAND_ENV);
            self.exacto_knife_command = value;
        }
        self
    }
}
