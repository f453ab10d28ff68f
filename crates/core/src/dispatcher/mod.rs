//! Command dispatch
//!
//! Each editor command maps to one `Action`. Handlers read the editor state
//! fresh, resolve paths, assemble a shell line, and hand it to the session.

mod actions;

pub use actions::{
    EMPTY_RENAME, ONLY_TEST_FOLDER, log_environment, perform_refactoring, perform_rename,
    run_focused_test, run_last_test_again, run_test_file, toggle_test_file,
};

use crate::{
    command::Refactoring,
    error::{Error, Result},
    interfaces::{Editor, TerminalFactory},
    session::Session,
    types::Outcome,
};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleTestFile,
    RunTestFile,
    RunFocusedTest,
    RunLastTestAgain,
    Refactor(Refactoring),
    Rename,
    LogEnvironment,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::ToggleTestFile,
        Action::RunTestFile,
        Action::RunFocusedTest,
        Action::RunLastTestAgain,
        Action::Refactor(Refactoring::ConsolidateAliases),
        Action::Refactor(Refactoring::ExpandAliases),
        Action::Refactor(Refactoring::SortAliases),
        Action::Rename,
        Action::LogEnvironment,
    ];

    /// The editor command id this action is registered under.
    pub fn id(&self) -> &'static str {
        match self {
            Action::ToggleTestFile => "extension.toggleTestFile",
            Action::RunTestFile => "extension.runTestFile",
            Action::RunFocusedTest => "extension.runFocusedTest",
            Action::RunLastTestAgain => "extension.runLastTestAgain",
            Action::Refactor(Refactoring::ConsolidateAliases) => "extension.consolidateAliases",
            Action::Refactor(Refactoring::ExpandAliases) => "extension.expandAliases",
            Action::Refactor(Refactoring::SortAliases) => "extension.sortAliases",
            Action::Rename => "extension.rename",
            Action::LogEnvironment => "extension.logTheEnvironment",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// Run `action` against the current editor state.
pub fn dispatch<F: TerminalFactory>(
    session: &mut Session<F>,
    editor: &mut dyn Editor,
    action: Action,
) -> Result<Outcome> {
    debug!("Dispatching {}", action);

    match action {
        Action::ToggleTestFile => toggle_test_file(editor),
        Action::RunTestFile => run_test_file(session, editor),
        Action::RunFocusedTest => run_focused_test(session, editor),
        Action::RunLastTestAgain => run_last_test_again(session, editor),
        Action::Refactor(refactoring) => perform_refactoring(session, editor, refactoring),
        Action::Rename => perform_rename(session, editor),
        Action::LogEnvironment => Ok(log_environment(editor)),
    }
}
