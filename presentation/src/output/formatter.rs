//! Output formatter trait

use absence_application::ReportAbsenceError;
use absence_domain::Reply;

/// Trait for rendering replies to a terminal-like transport
pub trait ReplyFormatter {
    /// Format a bot reply, including its menu if it has one
    fn format_reply(&self, reply: &Reply) -> String;

    /// Format a failure to handle a message
    fn format_error(&self, error: &ReportAbsenceError) -> String;
}
