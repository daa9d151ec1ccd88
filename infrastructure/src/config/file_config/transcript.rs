//! Transcript configuration from TOML (`[transcript]` section)

use serde::{Deserialize, Serialize};

/// Raw transcript configuration. No path, no transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// JSONL file receiving conversation events
    pub path: Option<String>,
}
