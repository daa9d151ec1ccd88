//! Conversation configuration from TOML (`[conversation]` section)
//!
//! ```toml
//! [[conversation.groups]]
//! label = "Sunflowers"
//! id = "1"
//!
//! [[conversation.groups]]
//! label = "Bluebells"
//! id = "2"
//! ```

use absence_domain::{ConfigIssue, ConfigIssueCode, GroupOption, GroupOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw conversation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// Group menu, in the order it is shown
    pub groups: Vec<GroupOption>,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        Self {
            groups: GroupOptions::default().options().to_vec(),
        }
    }
}

impl FileConversationConfig {
    pub fn to_group_options(&self) -> GroupOptions {
        GroupOptions::new(self.groups.clone())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.groups.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoGroups,
                "conversation.groups: at least one group is required",
            ));
        }

        let mut labels = HashSet::new();
        let mut ids = HashSet::new();
        for group in &self.groups {
            if !labels.insert(group.label.as_str()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateGroupLabel {
                        label: group.label.clone(),
                    },
                    format!(
                        "conversation.groups: label '{}' is listed more than once",
                        group.label
                    ),
                ));
            }
            if !ids.insert(group.id.as_str()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateGroupId {
                        id: group.id.clone(),
                    },
                    format!(
                        "conversation.groups: several labels lead to group '{}'",
                        group.id
                    ),
                ));
            }
        }

        issues
    }
}
