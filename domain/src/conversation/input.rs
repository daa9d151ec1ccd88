//! Inbound message classification

/// Command that opens (or restarts) a report
pub const START_COMMAND: &str = "/start";
/// Command that abandons the report in progress
pub const CANCEL_COMMAND: &str = "/cancel";

/// An inbound message as the conversation sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// The entry trigger
    Start,
    /// Explicit cancellation
    Cancel,
    /// Any other slash command; never accepted as a field value
    Command(String),
    /// Free text (a group label, a name or a birth date)
    Text(String),
}

impl Inbound {
    /// Classify a raw message.
    ///
    /// Only the command word is inspected (`/start@my_bot` and `/start now`
    /// both count as `/start`). Free text is passed through untouched.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        if !trimmed.starts_with('/') {
            return Inbound::Text(raw.to_string());
        }

        let word = trimmed.split_whitespace().next().unwrap_or(trimmed);
        let command = word.split('@').next().unwrap_or(word);
        match command {
            START_COMMAND => Inbound::Start,
            CANCEL_COMMAND => Inbound::Cancel,
            other => Inbound::Command(other.to_string()),
        }
    }
}

impl From<&str> for Inbound {
    fn from(raw: &str) -> Self {
        Inbound::parse(raw)
    }
}
