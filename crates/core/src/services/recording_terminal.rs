use crate::{
    error::Result,
    interfaces::{Terminal, TerminalFactory},
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Something that happened to a recorded terminal. `id` counts terminals
/// in creation order, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    Created { id: usize, name: String },
    Sent { id: usize, text: String },
    Shown { id: usize },
    Cleared { id: usize },
    Disposed { id: usize },
}

#[derive(Debug, Default)]
struct LogState {
    events: Vec<TerminalEvent>,
    closed: HashSet<usize>,
}

/// Shared view of everything the recorded terminals saw.
#[derive(Debug, Clone, Default)]
pub struct TerminalLog(Rc<RefCell<LogState>>);

impl TerminalLog {
    pub fn events(&self) -> Vec<TerminalEvent> {
        self.0.borrow().events.clone()
    }

    /// Every line sent, in order, across all terminals.
    pub fn sent(&self) -> Vec<String> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                TerminalEvent::Sent { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sent_by(&self, id: usize) -> Vec<String> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                TerminalEvent::Sent { id: sender, text } if *sender == id => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn created(&self) -> usize {
        self.count(|e| matches!(e, TerminalEvent::Created { .. }))
    }

    pub fn cleared(&self) -> usize {
        self.count(|e| matches!(e, TerminalEvent::Cleared { .. }))
    }

    /// Simulate the user closing terminal `id` without telling the registry.
    pub fn close(&self, id: usize) {
        self.0.borrow_mut().closed.insert(id);
    }

    fn count(&self, pred: impl Fn(&TerminalEvent) -> bool) -> usize {
        self.0.borrow().events.iter().filter(|e| pred(*e)).count()
    }

    fn is_closed(&self, id: usize) -> bool {
        self.0.borrow().closed.contains(&id)
    }

    fn push(&self, event: TerminalEvent) {
        self.0.borrow_mut().events.push(event);
    }
}

/// A terminal that records instead of executing.
pub struct RecordingTerminal {
    id: usize,
    name: String,
    exit_code: Option<i32>,
    log: TerminalLog,
}

impl Terminal for RecordingTerminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_text(&mut self, text: &str) -> Result<Option<i32>> {
        self.log.push(TerminalEvent::Sent {
            id: self.id,
            text: text.to_string(),
        });
        Ok(self.exit_code)
    }

    fn show(&mut self, _preserve_focus: bool) {
        self.log.push(TerminalEvent::Shown { id: self.id });
    }

    fn clear(&mut self) -> Result<()> {
        self.log.push(TerminalEvent::Cleared { id: self.id });
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.log.is_closed(self.id)
    }

    fn dispose(&mut self) {
        self.log.push(TerminalEvent::Disposed { id: self.id });
    }
}

#[derive(Debug, Default)]
pub struct RecordingTerminalFactory {
    log: TerminalLog,
    next_id: usize,
    exit_code: Option<i32>,
}

impl RecordingTerminalFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every terminal report `code` for each line it is sent.
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    pub fn log(&self) -> TerminalLog {
        self.log.clone()
    }
}

impl TerminalFactory for RecordingTerminalFactory {
    fn create(&mut self, name: &str) -> Result<Box<dyn Terminal>> {
        let id = self.next_id;
        self.next_id += 1;
        self.log.push(TerminalEvent::Created {
            id,
            name: name.to_string(),
        });

        Ok(Box::new(RecordingTerminal {
            id,
            name: name.to_string(),
            exit_code: self.exit_code,
            log: self.log.clone(),
        }))
    }
}
