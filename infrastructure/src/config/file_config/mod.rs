//! Raw TOML configuration data types
//!
//! These structs mirror the structure of the TOML config file. Every
//! section defaults, so a file only needs the keys it changes.

mod absence_log;
mod conversation;
mod logging;
mod repl;
mod roster;
mod transcript;

pub use absence_log::FileAbsenceLogConfig;
pub use conversation::FileConversationConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use roster::FileRosterConfig;
pub use transcript::FileTranscriptConfig;

use absence_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Children roster
    pub roster: FileRosterConfig,
    /// Daily absence files
    pub absence_log: FileAbsenceLogConfig,
    /// Group menu
    pub conversation: FileConversationConfig,
    /// JSONL conversation transcript
    pub transcript: FileTranscriptConfig,
    /// Diagnostic log file
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Required paths are set
    /// 2. The group menu is non-empty with unique labels
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("roster.path", &self.roster.path),
            ("absence_log.directory", &self.absence_log.directory),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    format!("{field}: a path is required"),
                ));
            }
        }

        issues.extend(self.conversation.validate());
        issues
    }

    /// True when no issue is fatal
    pub fn is_usable(&self) -> bool {
        !self.validate().iter().any(ConfigIssue::is_error)
    }
}
