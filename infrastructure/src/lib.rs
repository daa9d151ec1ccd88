//! Infrastructure layer for the kindergarten absence bot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer (CSV roster, daily CSV absence files,
//! JSONL transcript) plus configuration file loading.

pub mod absence_log;
pub mod config;
pub mod logging;
pub mod roster;

// Re-export commonly used types
pub use absence_log::CsvAbsenceLog;
pub use config::{
    ConfigLoader, FileAbsenceLogConfig, FileConfig, FileConversationConfig, FileLoggingConfig,
    FileReplConfig, FileRosterConfig, FileTranscriptConfig,
};
pub use logging::JsonlConversationLogger;
pub use roster::{CsvRosterSource, parse_roster};
