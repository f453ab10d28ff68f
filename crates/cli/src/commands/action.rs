use anyhow::{Context, Result};
use exrunner_core::{
    Action, ActiveFile, Notification, Outcome, Session, dispatch,
    services::ShellTerminalFactory, session::SessionState,
};
use std::{env, path::Path};
use tracing::debug;

use crate::config::Workspace;
use crate::host::{CliEditor, CliTerminalFactory};
use crate::utils::{absolutize, parse_filepath_with_position};

/// Run one editor action from the command line and report its outcome.
pub fn action_command(
    action: Action,
    filepath_arg: Option<&str>,
    new_name: Option<String>,
    root: Option<&str>,
    dry_run: bool,
) -> Result<Outcome> {
    let workspace = Workspace::load(root)?;
    match workspace.config_file {
        Some(ref path) => debug!("Using config {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;

    let active = filepath_arg.map(|arg| active_file(arg, &cwd));
    debug!("Dispatching {} for {:?}", action, active);

    let stdin = std::io::stdin();
    let mut editor =
        CliEditor::new(workspace.root.clone(), active, stdin.lock()).with_new_name(new_name);
    let mut session = build_session(&workspace, dry_run)?;

    let outcome = dispatch(&mut session, &mut editor, action)
        .with_context(|| format!("Failed to run {action}"))?;
    session.deactivate();

    Ok(outcome)
}

/// Process exit code for an outcome: the command's own status when it ran,
/// 1 when the user was warned instead.
pub fn exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Executed(execution) => execution.exit_code.unwrap_or(0),
        Outcome::Notified(Notification::Warning(_) | Notification::Error(_)) => 1,
        Outcome::Opened(_) | Outcome::Reported(_) | Outcome::Nothing => 0,
    }
}

fn active_file(filepath_arg: &str, cwd: &Path) -> ActiveFile {
    let (filepath, position) = parse_filepath_with_position(filepath_arg);
    ActiveFile::new(absolutize(Path::new(&filepath), cwd)).at(position.unwrap_or_default())
}

fn build_session(workspace: &Workspace, dry_run: bool) -> Result<Session<CliTerminalFactory>> {
    let state_path = SessionState::default_path(&workspace.root);

    if dry_run {
        let state = SessionState::load(&state_path)
            .with_context(|| format!("Failed to read {}", state_path.display()))?;
        let session = Session::new(CliTerminalFactory::DryRun, workspace.settings.clone());
        return Ok(session.with_state(state));
    }

    let factory =
        CliTerminalFactory::Shell(ShellTerminalFactory::new(Some(workspace.root.clone())));
    Session::new(factory, workspace.settings.clone())
        .with_state_file(state_path)
        .context("Failed to load session state")
}

#[cfg(test)]
mod tests {
    use super::*;
    use exrunner_core::{Execution, Position};

    #[test]
    fn test_active_file_from_argument() {
        let active = active_file("lib/foo.ex:3:5", Path::new("/root"));
        assert_eq!(active.path, Path::new("/root/lib/foo.ex"));
        assert_eq!(active.selection_start, Position::new(2, 4));
        assert_eq!(active.cursor, Position::new(2, 4));
    }

    #[test]
    fn test_exit_codes() {
        let ran = |exit_code| {
            Outcome::Executed(Execution {
                command: "mix test".to_string(),
                exit_code,
            })
        };

        assert_eq!(exit_code(&ran(None)), 0);
        assert_eq!(exit_code(&ran(Some(0))), 0);
        assert_eq!(exit_code(&ran(Some(2))), 2);
        assert_eq!(exit_code(&Outcome::Notified(Notification::warning("w"))), 1);
        assert_eq!(exit_code(&Outcome::Nothing), 0);
    }
}
