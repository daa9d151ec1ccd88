//! Console rendering of bot replies

use crate::output::formatter::ReplyFormatter;
use absence_application::ReportAbsenceError;
use absence_domain::{Reply, ReplyTemplate};
use colored::{ColoredString, Colorize};

/// Formats replies for a terminal. Menus become numbered lines.
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Format a reply with a speaker label, as shown in the chat
    pub fn format_bot_line(&self, reply: &Reply) -> String {
        format!(
            "{} {}",
            self.paint("bot:", |s| s.cyan().bold()),
            self.format_reply(reply)
        )
    }
}

impl ReplyFormatter for ConsoleFormatter {
    fn format_reply(&self, reply: &Reply) -> String {
        let mut output = reply.text.clone();

        for (index, suggestion) in reply.suggestions.iter().enumerate() {
            output.push_str(&format!(
                "\n  {} {}",
                self.paint(&format!("[{}]", index + 1), |s| s.yellow().bold()),
                suggestion
            ));
        }

        if reply.closes_conversation {
            output.push('\n');
            output.push_str(&self.paint("── conversation closed ──", |s| s.dimmed()));
        }

        output
    }

    fn format_error(&self, error: &ReportAbsenceError) -> String {
        let reply = if error.is_unsaved_report() {
            ReplyTemplate::not_saved()
        } else {
            ReplyTemplate::start_hint()
        };
        format!(
            "{} {}\n{}",
            self.paint("Error:", |s| s.red().bold()),
            error,
            self.format_reply(&reply)
        )
    }
}
