//! Absence log configuration from TOML (`[absence_log]` section)

use serde::{Deserialize, Serialize};

/// Raw absence log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAbsenceLogConfig {
    /// Directory receiving `absent_children_<date>.csv` files
    pub directory: String,
}

impl Default for FileAbsenceLogConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}
