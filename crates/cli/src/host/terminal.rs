use exrunner_core::{Result, Terminal, TerminalFactory, services::ShellTerminalFactory};

/// Prints each command line to stdout instead of running it.
pub struct PrintTerminal {
    name: String,
}

impl Terminal for PrintTerminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_text(&mut self, text: &str) -> Result<Option<i32>> {
        println!("{text}");
        Ok(None)
    }

    fn show(&mut self, _preserve_focus: bool) {}

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

pub enum CliTerminalFactory {
    Shell(ShellTerminalFactory),
    DryRun,
}

impl TerminalFactory for CliTerminalFactory {
    fn create(&mut self, name: &str) -> Result<Box<dyn Terminal>> {
        match self {
            CliTerminalFactory::Shell(factory) => factory.create(name),
            CliTerminalFactory::DryRun => Ok(Box::new(PrintTerminal {
                name: name.to_string(),
            })),
        }
    }
}
