//! Diagnostic log configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration
///
/// When `directory` is set, tracing output goes to a daily-rolling file
/// there instead of stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub directory: Option<String>,
    /// File name prefix of the rolling log
    pub file_prefix: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "absence-bot.log".to_string(),
        }
    }
}
