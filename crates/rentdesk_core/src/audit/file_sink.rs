//! Append-only file sink for the audit trail.

use super::{AuditError, AuditSink};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default audit trail file name in the desk working directory.
pub const AUDIT_LOG_FILE_NAME: &str = "rental_log.txt";

/// Sink appending each line to a plain-text file.
///
/// Every append opens the file in create+append mode, writes one line, and
/// releases the handle; no descriptor outlives a single write.
#[derive(Debug)]
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    /// Creates a sink writing to `path`. The file is created on first append.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditSink {
    fn append(&mut self, line: &str) -> Result<(), AuditError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
