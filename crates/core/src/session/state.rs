use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const STATE_DIR: &str = ".exrunner";
const STATE_FILE: &str = "state.json";

/// Session data that outlives a single process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_executed: Option<String>,
}

impl SessionState {
    /// `<root>/.exrunner/state.json`
    pub fn default_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join(STATE_DIR).join(STATE_FILE)
    }

    /// A missing file is an empty state.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let state = SessionState::load(&SessionState::default_path(temp_dir.path())).unwrap();
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_save_creates_state_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = SessionState::default_path(temp_dir.path());

        let state = SessionState {
            last_executed: Some("mix test test/app_test.exs".to_string()),
        };
        state.save(&path)?;

        assert!(temp_dir.path().join(".exrunner").is_dir());
        assert_eq!(SessionState::load(&path)?, state);
        Ok(())
    }

    #[test]
    fn test_corrupt_state_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "[1, 2").unwrap();

        assert!(matches!(
            SessionState::load(&path),
            Err(Error::SerializationError(_))
        ));
    }
}
