use super::SessionState;
use crate::{
    config::Settings,
    error::Result,
    interfaces::{Editor, TerminalFactory},
    terminal::{TERMINAL_NAME, TerminalRegistry},
    types::{Execution, Notification, Outcome},
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const NO_LAST_COMMAND: &str = "ExUnit : Not found last command executed";

/// Everything that lives for as long as the host keeps exrunner active:
/// the terminals, the settings, and the last command sent.
pub struct Session<F: TerminalFactory> {
    registry: TerminalRegistry<F>,
    settings: Settings,
    last_executed: Option<String>,
    state_file: Option<PathBuf>,
}

impl<F: TerminalFactory> Session<F> {
    pub fn new(factory: F, settings: Settings) -> Self {
        Self {
            registry: TerminalRegistry::new(factory),
            settings,
            last_executed: None,
            state_file: None,
        }
    }

    /// Persist the last command to `path`, picking up whatever an earlier
    /// session left there.
    pub fn with_state_file(mut self, path: PathBuf) -> Result<Self> {
        let state = SessionState::load(&path)?;
        debug!(
            "Loaded session state from {}: {:?}",
            path.display(),
            state.last_executed
        );
        self.state_file = Some(path);
        Ok(self.with_state(state))
    }

    /// Seed the session from saved state without persisting back to it.
    pub fn with_state(mut self, state: SessionState) -> Self {
        self.last_executed = state.last_executed;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn last_executed(&self) -> Option<&str> {
        self.last_executed.as_deref()
    }

    pub fn registry(&self) -> &TerminalRegistry<F> {
        &self.registry
    }

    /// Send `command` to the session terminal, bring it into view, and
    /// remember it for `repeat_last`. Failing to save the state file does not
    /// fail the run; the command is still remembered for this session.
    pub fn run(&mut self, command: &str) -> Result<Execution> {
        let terminal = self.registry.get(TERMINAL_NAME)?;
        let exit_code = terminal.send_text(command)?;
        terminal.show(true);

        self.last_executed = Some(command.to_string());
        if let Err(e) = self.persist() {
            warn!("Failed to save session state: {}", e);
        }

        if let Some(code) = exit_code.filter(|code| *code != 0) {
            info!("'{}' exited with status {}", command, code);
        }

        Ok(Execution {
            command: command.to_string(),
            exit_code,
        })
    }

    /// Replay the last command, or warn through `editor` when there is none.
    pub fn repeat_last(&mut self, editor: &mut dyn Editor) -> Result<Outcome> {
        match self.last_executed.clone() {
            Some(command) => Ok(Outcome::Executed(self.run(&command)?)),
            None => {
                warn!("{}", NO_LAST_COMMAND);
                let notification = Notification::warning(NO_LAST_COMMAND);
                editor.notify(notification.clone());
                Ok(Outcome::Notified(notification))
            }
        }
    }

    pub fn clear_terminal(&mut self) -> Result<()> {
        self.registry.get(TERMINAL_NAME)?.clear()
    }

    /// Forward the host's terminal-closed event.
    pub fn on_terminal_closed(&mut self, name: &str) -> bool {
        self.registry.on_closed(name)
    }

    /// Tear down every terminal this session created.
    pub fn deactivate(&mut self) {
        self.registry.close_all();
    }

    fn persist(&self) -> Result<()> {
        if let Some(ref path) = self.state_file {
            let state = SessionState {
                last_executed: self.last_executed.clone(),
            };
            state.save(path)?;
        }
        Ok(())
    }
}
