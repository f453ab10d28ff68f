use exrunner_core::{ActiveFile, Editor, InputPrompt, Notification, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The command line as an editor: the active file comes from the
/// arguments, "opening" a file prints its path, and prompts read a line
/// from `input`. End of input dismisses the prompt.
pub struct CliEditor<R: BufRead> {
    root: PathBuf,
    active: Option<ActiveFile>,
    new_name: Option<String>,
    input: R,
}

impl<R: BufRead> CliEditor<R> {
    pub fn new(root: PathBuf, active: Option<ActiveFile>, input: R) -> Self {
        Self {
            root,
            active,
            new_name: None,
            input,
        }
    }

    /// Answer the next prompt with `name` instead of reading input.
    pub fn with_new_name(mut self, name: Option<String>) -> Self {
        self.new_name = name;
        self
    }
}

impl<R: BufRead> Editor for CliEditor<R> {
    fn workspace_root(&self) -> Option<PathBuf> {
        Some(self.root.clone())
    }

    fn active_file(&self) -> Option<ActiveFile> {
        self.active.clone()
    }

    fn save_active_document(&mut self) -> Result<()> {
        // files are read from disk as they are
        Ok(())
    }

    fn open_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!("{} does not exist yet", path.display());
        }
        println!("{}", path.display());
        Ok(())
    }

    fn prompt_input(&mut self, prompt: &InputPrompt) -> Option<String> {
        if let Some(name) = self.new_name.take() {
            return Some(name);
        }

        let mut stderr = std::io::stderr();
        write!(stderr, "{} ({}): ", prompt.prompt, prompt.place_holder).ok();
        stderr.flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        eprintln!("{notification}");
    }
}
