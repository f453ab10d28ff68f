use anyhow::{Context, Result};
use exrunner_core::Settings;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::utils::absolutize;

/// Where the project lives and how its tools are invoked.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub settings: Settings,
    pub config_file: Option<PathBuf>,
}

impl Workspace {
    /// Resolve the workspace for this process: `--root`, then `PROJECT_ROOT`,
    /// then the directory of the nearest config file, then the current
    /// directory. `EXRUNNER_*` variables override the loaded settings.
    pub fn load(root_arg: Option<&str>) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let explicit_root = root_arg
            .map(PathBuf::from)
            .or_else(|| env::var("PROJECT_ROOT").ok().map(PathBuf::from));

        let mut workspace = Self::load_from(explicit_root, &cwd)?;
        workspace.settings = workspace.settings.with_env_overrides();
        Ok(workspace)
    }

    pub fn load_from(explicit_root: Option<PathBuf>, cwd: &Path) -> Result<Self> {
        let explicit_root = explicit_root.map(|root| absolutize(&root, cwd));
        let start = explicit_root.as_deref().unwrap_or(cwd);

        let (settings, config_file) = Settings::discover(start)
            .with_context(|| format!("Failed to load config above {}", start.display()))?;

        let root = explicit_root
            .or_else(|| config_file.as_deref().and_then(Path::parent).map(Path::to_path_buf))
            .unwrap_or_else(|| cwd.to_path_buf());

        debug!("Workspace root: {}", root.display());
        Ok(Self {
            root,
            settings,
            config_file,
        })
    }
}
