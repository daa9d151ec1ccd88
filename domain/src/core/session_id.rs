//! Session identity value object

use serde::{Deserialize, Serialize};

/// Identity of one reporting conversation (Value Object)
///
/// Supplied by the message transport: a chat id for a messenger,
/// a caregiver name in the terminal REPL. Opaque to the domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        SessionId::new(s)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        SessionId::new(s)
    }
}

impl From<i64> for SessionId {
    fn from(chat_id: i64) -> Self {
        SessionId::new(chat_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_from_chat_id() {
        let id: SessionId = 4242_i64.into();
        assert_eq!(id.as_str(), "4242");
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::from("anna");
        assert_eq!(id.to_string(), "anna");
    }
}
