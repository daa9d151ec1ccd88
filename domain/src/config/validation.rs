//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`]s instead of failing on
//! the first one, so every problem can be shown at startup. Issues with
//! [`Severity::Error`] stop the bot from starting.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required path setting is empty.
    EmptyPath { field: String },
    /// No groups are configured, so the group menu would be empty.
    NoGroups,
    /// Two menu entries share a label; only the first could ever be picked.
    DuplicateGroupLabel { label: String },
    /// Two menu entries map to the same roster group.
    DuplicateGroupId { id: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let error = ConfigIssue::error(ConfigIssueCode::NoGroups, "no groups");
        assert!(error.is_error());

        let warning = ConfigIssue::warning(
            ConfigIssueCode::DuplicateGroupId { id: "1".to_string() },
            "duplicate id",
        );
        assert!(!warning.is_error());
        assert_eq!(warning.severity, Severity::Warning);
    }
}
