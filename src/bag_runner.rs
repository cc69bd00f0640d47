use std::fs::File;
use std::io::Write;

use log::{info, warn};

use crate::bag_error::{BagError, Result};
use crate::bag_lang::Element;
use crate::bag_multiset::Multiset;
use crate::bag_parser::Command;

/// Applies script commands to a multiset and records what each one printed.
#[derive(Default)]
pub struct ScriptRunner {
    pub multiset: Multiset<Element>,
    pub transcript: Vec<String>,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one command. Recoverable multiset errors are written to the
    /// transcript instead of being returned.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add(element) => self.multiset.add(element),
            Command::Remove(element, n) => match self.multiset.remove_n(&element, n) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    warn!("remove {} {} rejected: {}", element, n, e);
                    self.transcript.push(format!("error: {}", e));
                }
                Err(e) => return Err(e),
            },
            Command::Get(element) => {
                let count = self.multiset.get(&element);
                self.transcript.push(count.to_string());
            }
            Command::Size => self.transcript.push(self.multiset.size().to_string()),
            Command::Render => {
                let rendered = self.multiset.render();
                self.transcript.push(rendered.trim_end().to_string());
            }
        }
        Ok(())
    }

    pub fn run(&mut self, commands: Vec<Command>) -> Result<()> {
        for command in commands {
            self.apply(command)?;
        }
        info!(
            "Script finished: {} elements, {} distinct",
            self.multiset.size(),
            self.multiset.distinct_len()
        );
        Ok(())
    }

    /// Writes the transcript to `output_path`, one entry per line.
    pub fn write_transcript(&self, output_path: &str) -> Result<()> {
        let io_error = |source: std::io::Error| BagError::Io {
            path: output_path.to_string(),
            source,
        };
        let mut file = File::create(output_path).map_err(io_error)?;
        for entry in &self.transcript {
            writeln!(file, "{}", entry).map_err(io_error)?;
        }
        Ok(())
    }
}
