//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
    /// Colored output
    pub color: bool,
    /// Name of the session the REPL starts in
    pub caregiver: String,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            color: true,
            caregiver: "caregiver".to_string(),
        }
    }
}
