//! Daily absence log port
//!
//! Defines the append-only store for filed absences. Implementations
//! keep one file per calendar date, write the header exactly once per
//! file and serialize concurrent appends.

use absence_domain::AbsenceLogEntry;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting an absence.
///
/// Not recoverable by the conversation: the caller must not confirm the
/// report to the caregiver.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Could not write absence log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode absence row: {0}")]
    Encode(String),
}

/// What an append did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReceipt {
    /// File the row went to
    pub path: PathBuf,
    /// True when this append created the day's file
    pub header_written: bool,
}

/// Append-only store of filed absences
#[async_trait]
pub trait AbsenceLog: Send + Sync {
    /// Append one row to today's file.
    async fn append(&self, entry: &AbsenceLogEntry) -> Result<AppendReceipt, PersistenceError>;
}
