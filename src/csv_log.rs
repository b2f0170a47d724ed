//! Append-only CSV log of samples.
//!
//! The file is opened once in append-or-create mode. A header row is written
//! only when the file is empty at open time, so re-running against an
//! existing log continues it without duplicating the header. Each row is
//! handed to the file as one complete line and flushed; nothing is held back
//! between rows, so a row whose write failed is never emitted later.

use crate::error::{StartupError, TickError};
use crate::sample::Sample;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Timestamp,FileCount";

/// Owns the output handle for the lifetime of the run.
pub struct CsvLog<W: Write = File> {
    path: PathBuf,
    writer: W,
}

impl CsvLog<File> {
    /// Open `path` for append, creating it if needed, and write the header if
    /// the file is empty.
    pub fn open(path: &Path) -> Result<Self, StartupError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StartupError::OpenOutput {
                path: path.to_path_buf(),
                source: e,
            })?;

        let len = file
            .metadata()
            .map_err(|e| StartupError::StatOutput {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        let mut log = Self::from_writer(path.to_path_buf(), file);

        if len == 0 {
            log.write_line(HEADER)
                .map_err(|e| StartupError::WriteHeader {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            tracing::debug!(path = %path.display(), "wrote CSV header");
        } else {
            tracing::debug!(path = %path.display(), bytes = len, "appending to existing CSV");
        }

        Ok(log)
    }
}

impl<W: Write> CsvLog<W> {
    /// Wrap an already-positioned writer. No header is written.
    pub fn from_writer(path: PathBuf, writer: W) -> Self {
        Self { path, writer }
    }

    /// Append one sample row and flush it.
    pub fn append(&mut self, sample: &Sample) -> Result<(), TickError> {
        self.write_line(&sample.csv_row())
            .map_err(|e| TickError::WriteRow {
                path: self.path.clone(),
                source: e,
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // No buffering here: bytes from a failed write must never precede a later row.
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.writer.write_all(buf.as_bytes())?;
        self.writer.flush()
    }
}
