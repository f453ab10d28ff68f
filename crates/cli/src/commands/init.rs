use anyhow::{Context, Result};
use exrunner_core::{Settings, config::CONFIG_FILE_NAMES};
use std::{env, path::PathBuf};
use tracing::info;

/// Write `.exrunner.json` with the default Mix invocations.
pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Settings::template()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
