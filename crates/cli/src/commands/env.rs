use anyhow::{Context, Result};
use exrunner_core::{Action, Outcome};

use super::action_command;

/// Print the resolved environment for a file as JSON.
pub fn env_command(filepath_arg: Option<&str>, root: Option<&str>) -> Result<Outcome> {
    let outcome = action_command(Action::LogEnvironment, filepath_arg, None, root, true)?;

    if let Outcome::Reported(ref report) = outcome {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{json}");
    }

    Ok(outcome)
}
