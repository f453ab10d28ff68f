use crate::{
    error::Result,
    interfaces::{Terminal, TerminalFactory},
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Lazily created terminals keyed by display name.
///
/// At most one live terminal exists per name. The registry is the only
/// writer of the map; a closed terminal is evicted so the next `get`
/// starts a fresh session instead of writing into a dead one.
pub struct TerminalRegistry<F: TerminalFactory> {
    factory: F,
    terminals: HashMap<String, Box<dyn Terminal>>,
}

impl<F: TerminalFactory> TerminalRegistry<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            terminals: HashMap::new(),
        }
    }

    /// The terminal called `name`, created on first use.
    pub fn get(&mut self, name: &str) -> Result<&mut dyn Terminal> {
        if self.terminals.get(name).is_some_and(|t| t.is_closed()) {
            debug!("Terminal '{}' was closed, evicting", name);
            self.terminals.remove(name);
        }

        let terminal = match self.terminals.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!("Creating terminal '{}'", name);
                entry.insert(self.factory.create(name)?)
            }
        };

        Ok(&mut **terminal)
    }

    /// Forget the terminal called `name` after the host reports it closed.
    /// Returns whether an entry was removed.
    pub fn on_closed(&mut self, name: &str) -> bool {
        let removed = self.terminals.remove(name).is_some();
        if removed {
            debug!("Terminal '{}' closed by user", name);
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.terminals.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// Dispose of every terminal. Used when the session is torn down.
    pub fn close_all(&mut self) {
        for (name, mut terminal) in self.terminals.drain() {
            debug!("Disposing terminal '{}'", name);
            terminal.dispose();
        }
    }
}
