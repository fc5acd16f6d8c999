//! Append-only history file
//!
//! Each operation opens the file, does its work and closes it again; no handle
//! is kept between calls.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Lines, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

use super::entry::HistoryEntry;

#[derive(Debug, Clone)]
pub(crate) struct HistoryLog {
    path: PathBuf,
}

/// Lazy reader over the log's lines. Empty when the file does not exist.
pub(crate) struct HistoryLines {
    path: PathBuf,
    lines: Option<Lines<BufReader<File>>>,
}

impl Iterator for HistoryLines {
    type Item = Result<String, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;
        match lines.next()? {
            Ok(line) => Some(Ok(line)),
            Err(e) => {
                // Stop after the first read error
                self.lines = None;
                Some(Err(AppError::io(&self.path, e)))
            }
        }
    }
}

impl HistoryLog {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Open the log for reading. Each call starts again from the first line.
    pub(crate) fn load_all(&self) -> Result<HistoryLines, AppError> {
        let lines = match File::open(&self.path) {
            Ok(file) => Some(BufReader::new(file).lines()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No history at {}, starting fresh", self.path.display());
                None
            }
            Err(e) => return Err(AppError::io(&self.path, e)),
        };
        Ok(HistoryLines {
            path: self.path.clone(),
            lines,
        })
    }

    /// Collect every line, failing on the first read error
    pub(crate) fn read_lines(&self) -> Result<Vec<String>, AppError> {
        self.load_all()?.collect()
    }

    /// Append one entry, creating the file if needed.
    ///
    /// The whole line, terminator included, goes out in a single write.
    pub(crate) fn append(&self, entry: &HistoryEntry) -> Result<(), AppError> {
        let mut line = entry.to_line();
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::io(&self.path, e))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| AppError::io(&self.path, e))?;
        log::debug!("Appended to {}: {}", self.path.display(), line.trim_end());
        Ok(())
    }

    /// Truncate to empty. The file itself is kept (or created).
    pub(crate) fn clear(&self) -> Result<(), AppError> {
        File::create(&self.path).map_err(|e| AppError::io(&self.path, e))?;
        log::debug!("Cleared {}", self.path.display());
        Ok(())
    }
}
