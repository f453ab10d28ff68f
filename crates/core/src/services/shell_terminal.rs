//! Terminal backed by a local shell

use crate::{
    error::Result,
    interfaces::{Terminal, TerminalFactory},
};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::{debug, info, warn};

const SHELL: &str = "sh";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
/// Shells report a command killed by signal N as 128 + N.
const SIGNAL_EXIT_BASE: i32 = 128;

/// Runs each line with `sh -c`, inheriting stdio, and waits for it.
pub struct ShellTerminal {
    name: String,
    working_dir: Option<PathBuf>,
}

impl ShellTerminal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }
}

impl Terminal for ShellTerminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_text(&mut self, text: &str) -> Result<Option<i32>> {
        info!("Running: {}", text);

        let mut cmd = Command::new(SHELL);
        cmd.arg("-c").arg(text);
        if let Some(ref dir) = self.working_dir {
            debug!("Working directory: {}", dir.display());
            cmd.current_dir(dir);
        }

        let status = cmd.status()?;
        debug!("'{}' exited with {:?}", text, status);
        Ok(Some(exit_code(status)))
    }

    fn show(&mut self, _preserve_focus: bool) {
        // stdio is inherited, so output is already in front of the user
    }

    fn clear(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        if stdout.is_terminal() {
            stdout.write_all(CLEAR_SCREEN.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }
}

/// The shell's exit code, or the shell convention for a signalled process.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!("Command killed by signal {}", signal);
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    1
}

/// Creates `ShellTerminal`s rooted at the workspace.
#[derive(Debug, Clone, Default)]
pub struct ShellTerminalFactory {
    working_dir: Option<PathBuf>,
}

impl ShellTerminalFactory {
    pub fn new(working_dir: Option<PathBuf>) -> Self {
        Self { working_dir }
    }
}

impl TerminalFactory for ShellTerminalFactory {
    fn create(&mut self, name: &str) -> Result<Box<dyn Terminal>> {
        let terminal = ShellTerminal::new(name);
        let terminal = match self.working_dir.clone() {
            Some(dir) => terminal.with_working_dir(dir),
            None => terminal,
        };
        Ok(Box::new(terminal))
    }
}
