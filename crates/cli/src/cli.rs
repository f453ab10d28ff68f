use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use exrunner_core::{Action, Refactoring};

use crate::commands::{action_command, env_command, exit_code, init_command};

#[derive(Parser, Debug)]
#[command(name = "exrunner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging\n    PROJECT_ROOT      Workspace root when --root is not given")]
pub struct Cli {
    /// Workspace root (defaults to PROJECT_ROOT, the config file's directory, or the current directory)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Print commands instead of executing them
    #[arg(short, long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the counterpart of a file (source <-> test)
    #[command(visible_alias = "t")]
    Toggle {
        /// Path to the Elixir file
        filepath: String,
    },
    /// Run the test file for a source or test file
    Test {
        /// Path to the Elixir file
        filepath: String,
    },
    /// Run the test at a specific line of a test file
    #[command(visible_alias = "f")]
    Focus {
        /// Path to the test file with a line number (e.g., test/app_test.exs:12)
        filepath: String,
    },
    /// Run the last command again
    #[command(visible_alias = "l")]
    Last,
    /// Run an alias refactoring on a file
    Refactor {
        refactoring: RefactoringName,

        /// Path to the Elixir file
        filepath: String,
    },
    /// Rename the identifier at a position
    Rename {
        /// Path with line and column (e.g., lib/app.ex:3:5)
        filepath: String,

        /// New name; prompted for on stdin when omitted
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Run an editor command by id (e.g., extension.runTestFile)
    Dispatch {
        action: String,

        /// Path with optional line and column
        filepath: Option<String>,
    },
    /// Show how a file resolves against the workspace
    Env {
        /// Path with optional line and column
        filepath: Option<String>,
    },
    /// Write an exrunner config file
    Init {
        /// Directory to write the config to (defaults to current directory)
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the command and return the process exit code
    pub fn execute(self) -> Result<i32> {
        let root = self.root.as_deref();
        let dry_run = self.dry_run;
        let run = |action: Action, filepath: Option<&str>, name: Option<String>| {
            action_command(action, filepath, name, root, dry_run)
        };

        let outcome = match self.command {
            Commands::Toggle { filepath } => run(Action::ToggleTestFile, Some(&filepath), None)?,
            Commands::Test { filepath } => run(Action::RunTestFile, Some(&filepath), None)?,
            Commands::Focus { filepath } => run(Action::RunFocusedTest, Some(&filepath), None)?,
            Commands::Last => run(Action::RunLastTestAgain, None, None)?,
            Commands::Refactor {
                refactoring,
                filepath,
            } => run(Action::Refactor(refactoring.into()), Some(&filepath), None)?,
            Commands::Rename { filepath, name } => run(Action::Rename, Some(&filepath), name)?,
            Commands::Dispatch { action, filepath } => {
                run(action.parse()?, filepath.as_deref(), None)?
            }
            Commands::Env { filepath } => env_command(filepath.as_deref(), root)?,
            Commands::Init { cwd, force } => {
                init_command(cwd.as_deref(), force)?;
                return Ok(0);
            }
        };

        Ok(exit_code(&outcome))
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefactoringName {
    ConsolidateAliases,
    ExpandAliases,
    SortAliases,
}

impl From<RefactoringName> for Refactoring {
    fn from(name: RefactoringName) -> Self {
        match name {
            RefactoringName::ConsolidateAliases => Refactoring::ConsolidateAliases,
            RefactoringName::ExpandAliases => Refactoring::ExpandAliases,
            RefactoringName::SortAliases => Refactoring::SortAliases,
        }
    }
}
