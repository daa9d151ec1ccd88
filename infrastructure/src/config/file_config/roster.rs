//! Roster configuration from TOML (`[roster]` section)

use serde::{Deserialize, Serialize};

/// Raw roster configuration
///
/// ```toml
/// [roster]
/// path = "/srv/kindergarten/children.csv"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRosterConfig {
    /// CSV file listing every enrolled child. Required.
    pub path: String,
}
