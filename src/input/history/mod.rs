mod file_ops;

use std::path::PathBuf;

use self::file_ops::FileOps;
use crate::error::ShellError;

/// Capacity of the in-memory history list.
pub const HIST_MAX: usize = 4096;

/// Append-only record of executed command lines. Entries accumulate in
/// memory during the session and are written out once, at termination,
/// via `flush`.
pub struct History {
    entries: Vec<String>,
    file_ops: FileOps,
    max_entries: usize,
}

impl History {
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, ShellError> {
        let file_ops = FileOps::new(history_file);
        let entries = file_ops.load_entries()?;

        Ok(History {
            entries,
            file_ops,
            max_entries,
        })
    }

    pub fn add(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }
        self.entries.push(entry.to_string());
        self.trim_entries();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn flush(&self) -> Result<(), ShellError> {
        self.file_ops.write_entries(&self.entries)
    }

    fn trim_entries(&mut self) {
        if self.entries.len() > self.max_entries {
            let overflow = self.entries.len() - self.max_entries;
            self.entries.drain(..overflow);
        }
    }
}
