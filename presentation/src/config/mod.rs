//! Presentation-level configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Path to history file; no history is kept when unset
    pub history_file: Option<PathBuf>,
    /// Enable colored terminal output
    pub color: bool,
    /// Session the REPL starts in
    pub caregiver: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            color: true,
            caregiver: "caregiver".to_string(),
        }
    }
}
