use crate::{
    command::{self, Refactoring},
    error::Result,
    interfaces::{Editor, InputPrompt, TerminalFactory},
    paths::{RelativePath, relative_path},
    session::Session,
    types::{ActiveFile, EnvironmentReport, Notification, Outcome},
};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

pub const ONLY_TEST_FOLDER: &str = "ExUnit Line: only test folder";
pub const EMPTY_RENAME: &str = "A search query is mandatory to execute this action";

struct Resolved {
    root: PathBuf,
    active: ActiveFile,
    relative: RelativePath,
}

/// Workspace root, active file, and its relative path, when all three exist
/// and the file sits under `lib/` or `test/`.
fn resolve(editor: &dyn Editor) -> Option<Resolved> {
    let root = editor.workspace_root()?;
    let active = editor.active_file()?;
    let Some(relative) = relative_path(&active.path, Some(root.as_path())) else {
        debug!(
            "{} is outside lib/ and test/ of {}",
            active.path.display(),
            root.display()
        );
        return None;
    };

    Some(Resolved {
        root,
        active,
        relative,
    })
}

fn notify(editor: &mut dyn Editor, notification: Notification) -> Outcome {
    match notification {
        Notification::Warning(_) => warn!("{}", notification),
        Notification::Error(_) => error!("{}", notification),
    }
    editor.notify(notification.clone());
    Outcome::Notified(notification)
}

/// Save the document and clear the terminal ahead of a test run.
fn prepare_run<F: TerminalFactory>(
    session: &mut Session<F>,
    editor: &mut dyn Editor,
) -> Result<()> {
    editor.save_active_document()?;
    session.clear_terminal()
}

/// Open the source file for a test, or the test file for anything else.
pub fn toggle_test_file(editor: &mut dyn Editor) -> Result<Outcome> {
    let Some(resolved) = resolve(editor) else {
        return Ok(Outcome::Nothing);
    };

    let target = resolved.root.join(resolved.relative.counterpart());
    debug!("Toggling {} -> {}", resolved.relative, target.display());
    editor.open_file(&target)?;
    Ok(Outcome::Opened(target))
}

pub fn run_test_file<F: TerminalFactory>(
    session: &mut Session<F>,
    editor: &mut dyn Editor,
) -> Result<Outcome> {
    prepare_run(session, editor)?;

    let Some(resolved) = resolve(editor) else {
        return Ok(Outcome::Nothing);
    };

    let line = command::test_file(
        &session.settings().exunit_command,
        &resolved.relative.test_path(),
    );
    Ok(Outcome::Executed(session.run(&line)?))
}

/// Run the test under the cursor. Only test files have a line to focus on.
pub fn run_focused_test<F: TerminalFactory>(
    session: &mut Session<F>,
    editor: &mut dyn Editor,
) -> Result<Outcome> {
    prepare_run(session, editor)?;

    match resolve(editor) {
        Some(resolved) if resolved.relative.is_test() => {
            let (line, _) = resolved.active.cursor.one_based();
            let command_line = command::focused_test(
                &session.settings().exunit_command,
                &resolved.relative.test_path(),
                line,
            );
            Ok(Outcome::Executed(session.run(&command_line)?))
        }
        _ => Ok(notify(editor, Notification::warning(ONLY_TEST_FOLDER))),
    }
}

pub fn run_last_test_again<F: TerminalFactory>(
    session: &mut Session<F>,
    editor: &mut dyn Editor,
) -> Result<Outcome> {
    prepare_run(session, editor)?;
    session.repeat_last(editor)
}

pub fn perform_refactoring<F: TerminalFactory>(
    session: &mut Session<F>,
    editor: &mut dyn Editor,
    refactoring: Refactoring,
) -> Result<Outcome> {
    let Some(active) = editor.active_file() else {
        return Ok(Outcome::Nothing);
    };
    editor.save_active_document()?;

    let line = command::refactor(
        &session.settings().exacto_knife_command,
        refactoring,
        &active.path_str(),
    );
    Ok(Outcome::Executed(session.run(&line)?))
}

/// Prompt for a new name and rename the identifier at the selection start.
/// A dismissed prompt does nothing; an empty name is an error.
pub fn perform_rename<F: TerminalFactory>(
    session: &mut Session<F>,
    editor: &mut dyn Editor,
) -> Result<Outcome> {
    let Some(active) = editor.active_file() else {
        return Ok(Outcome::Nothing);
    };
    editor.save_active_document()?;

    match editor.prompt_input(&InputPrompt::rename()) {
        None => {
            debug!("Rename dismissed");
            Ok(Outcome::Nothing)
        }
        Some(name) if name.is_empty() => Ok(notify(editor, Notification::error(EMPTY_RENAME))),
        Some(name) => {
            let line = command::rename(
                &session.settings().exacto_knife_command,
                &active.path_str(),
                active.selection_start,
                &name,
            );
            Ok(Outcome::Executed(session.run(&line)?))
        }
    }
}

/// Log what the path resolver sees for the current editor state.
pub fn log_environment(editor: &dyn Editor) -> Outcome {
    let workspace_root = editor.workspace_root();
    let active_file = editor.active_file().map(|active| active.path);
    let relative = active_file
        .as_deref()
        .and_then(|path| relative_path(path, workspace_root.as_deref()));

    let report = EnvironmentReport {
        workspace_root,
        active_file,
        relative_path: relative.as_ref().map(|r| r.to_string()),
        test_path: relative.as_ref().map(|r| r.test_path()),
    };

    info!("workspace root: {:?}", report.workspace_root);
    info!("active file: {:?}", report.active_file);
    info!("relative path: {:?}", report.relative_path);
    info!("test path: {:?}", report.test_path);

    Outcome::Reported(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Settings,
        services::{RecordingTerminalFactory, ScriptedEditor, TerminalLog},
        session::NO_LAST_COMMAND,
        types::Position,
    };
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    const ROOT: &str = "/root";

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn session() -> (Session<RecordingTerminalFactory>, TerminalLog) {
        let factory = RecordingTerminalFactory::new();
        let log = factory.log();
        (Session::new(factory, Settings::template()), log)
    }

    fn editor_at(path: &str, position: Position) -> ScriptedEditor {
        ScriptedEditor::new()
            .with_root(ROOT)
            .with_active_file(ActiveFile::new(path).at(position))
    }

    #[test]
    fn test_toggle_source_to_test() {
        let mut editor = editor_at("/root/lib/a/b.ex", Position::default());

        let outcome = toggle_test_file(&mut editor).unwrap();

        let expected = PathBuf::from("/root/test/a/b_test.exs");
        assert_eq!(outcome, Outcome::Opened(expected.clone()));
        assert_eq!(editor.opened, vec![expected]);
    }

    #[test]
    fn test_toggle_test_to_source() {
        let mut editor = editor_at("/root/test/a/b_test.exs", Position::default());

        toggle_test_file(&mut editor).unwrap();

        assert_eq!(editor.opened, vec![PathBuf::from("/root/lib/a/b.ex")]);
    }

    #[test]
    fn test_toggle_outside_trees_is_silent() {
        let mut editor = editor_at("/root/config/config.exs", Position::default());

        assert_eq!(toggle_test_file(&mut editor).unwrap(), Outcome::Nothing);
        assert!(editor.opened.is_empty());
        assert!(editor.notifications.is_empty());
    }

    #[test]
    fn test_toggle_without_workspace() {
        let mut editor =
            ScriptedEditor::new().with_active_file(ActiveFile::new("/root/lib/a.ex"));

        assert_eq!(toggle_test_file(&mut editor).unwrap(), Outcome::Nothing);
    }

    #[test]
    fn test_run_test_file_from_source() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/lib/a/b.ex", Position::new(9, 0));

        run_test_file(&mut session, &mut editor).unwrap();

        assert_eq!(log.sent(), vec!["mix test test/a/b_test.exs"]);
        assert_eq!(log.cleared(), 1);
        assert_eq!(editor.saves, 1);
    }

    #[test]
    fn test_run_test_file_outside_trees_sends_nothing() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/mix.exs", Position::default());

        let outcome = run_test_file(&mut session, &mut editor).unwrap();

        assert_eq!(outcome, Outcome::Nothing);
        assert!(log.sent().is_empty());
        assert!(editor.notifications.is_empty());
    }

    #[test]
    fn test_run_focused_test_appends_cursor_line() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/test/a/b_test.exs", Position::new(11, 3));

        run_focused_test(&mut session, &mut editor).unwrap();

        assert_eq!(log.sent(), vec!["mix test test/a/b_test.exs:12"]);
    }

    #[test]
    fn test_run_focused_test_from_lib_warns() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/lib/a/b.ex", Position::new(11, 3));

        let outcome = run_focused_test(&mut session, &mut editor).unwrap();

        assert_eq!(outcome, Outcome::Notified(Notification::warning(ONLY_TEST_FOLDER)));
        assert_eq!(editor.notifications, vec![Notification::warning(ONLY_TEST_FOLDER)]);
        assert!(log.sent().is_empty());
    }

    #[test]
    fn test_run_last_test_again_without_history() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/lib/a.ex", Position::default());

        run_last_test_again(&mut session, &mut editor).unwrap();

        assert_eq!(editor.notifications, vec![Notification::warning(NO_LAST_COMMAND)]);
        assert!(log.sent().is_empty());
    }

    #[test]
    fn test_run_last_test_again_replays_focused_run() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/test/a_test.exs", Position::new(4, 0));

        run_focused_test(&mut session, &mut editor).unwrap();
        editor.set_active_file(Some(ActiveFile::new("/root/lib/other.ex")));
        run_last_test_again(&mut session, &mut editor).unwrap();

        assert_eq!(
            log.sent(),
            vec!["mix test test/a_test.exs:5", "mix test test/a_test.exs:5"]
        );
    }

    #[test]
    fn test_refactoring_uses_absolute_path() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/lib/foo.ex", Position::default());

        perform_refactoring(&mut session, &mut editor, Refactoring::ConsolidateAliases).unwrap();

        assert_eq!(
            log.sent(),
            vec!["mix exacto_knife consolidate_aliases /root/lib/foo.ex"]
        );
        assert_eq!(editor.saves, 1);
    }

    #[test]
    fn test_refactoring_without_active_file() {
        let (mut session, log) = session();
        let mut editor = ScriptedEditor::new().with_root(ROOT);

        let outcome =
            perform_refactoring(&mut session, &mut editor, Refactoring::SortAliases).unwrap();

        assert_eq!(outcome, Outcome::Nothing);
        assert_eq!(log.created(), 0);
    }

    #[test]
    fn test_rename_sends_selection_start() {
        let (mut session, log) = session();
        let mut editor =
            editor_at("/root/lib/foo.ex", Position::new(2, 4)).with_reply(Some("NewName"));

        perform_rename(&mut session, &mut editor).unwrap();

        assert_eq!(
            log.sent(),
            vec!["mix exacto_knife rename /root/lib/foo.ex 3 5 NewName"]
        );
        assert_eq!(editor.prompts, vec![InputPrompt::rename()]);
        assert!(editor.notifications.is_empty());
    }

    #[test]
    fn test_rename_empty_name_errors() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/lib/foo.ex", Position::new(2, 4)).with_reply(Some(""));

        perform_rename(&mut session, &mut editor).unwrap();

        assert_eq!(editor.notifications, vec![Notification::error(EMPTY_RENAME)]);
        assert!(log.sent().is_empty());
    }

    #[test]
    fn test_notifications_log_at_their_level() {
        let logs = capture_logs(|| {
            let (mut session, _log) = session();
            let mut editor =
                editor_at("/root/lib/foo.ex", Position::new(2, 4)).with_reply(Some(""));
            perform_rename(&mut session, &mut editor).unwrap();
        });
        assert!(logs.contains("ERROR"));
        assert!(logs.contains(EMPTY_RENAME));
        assert!(!logs.contains("WARN"));

        let logs = capture_logs(|| {
            let (mut session, _log) = session();
            let mut editor = editor_at("/root/lib/foo.ex", Position::default());
            run_focused_test(&mut session, &mut editor).unwrap();
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains(ONLY_TEST_FOLDER));
        assert!(!logs.contains("ERROR"));
    }

    #[test]
    fn test_rename_cancelled_does_nothing() {
        let (mut session, log) = session();
        let mut editor = editor_at("/root/lib/foo.ex", Position::new(2, 4)).with_reply(None);

        let outcome = perform_rename(&mut session, &mut editor).unwrap();

        assert_eq!(outcome, Outcome::Nothing);
        assert!(editor.notifications.is_empty());
        assert!(log.sent().is_empty());
    }

    #[test]
    fn test_log_environment_report() {
        let editor = editor_at("/root/lib/a/b.ex", Position::default());

        let Outcome::Reported(report) = log_environment(&editor) else {
            panic!("expected a report");
        };

        assert_eq!(report.workspace_root, Some(PathBuf::from(ROOT)));
        assert_eq!(report.relative_path.as_deref(), Some("lib/a/b.ex"));
        assert_eq!(report.test_path.as_deref(), Some("test/a/b_test.exs"));
    }

    #[test]
    fn test_log_environment_without_workspace() {
        let editor = ScriptedEditor::new();

        assert_eq!(
            log_environment(&editor),
            Outcome::Reported(EnvironmentReport::default())
        );
    }
}
