//! Outbound replies

use serde::{Deserialize, Serialize};

/// What the transport should show the caregiver after a message
///
/// `suggestions` is the closed set of replies to offer as buttons; an
/// empty list means "remove any menu and accept free text".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub suggestions: Vec<String>,
    /// The conversation is over; the next report needs `/start`
    pub closes_conversation: bool,
}

impl Reply {
    /// A prompt that expects free text
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestions: Vec::new(),
            closes_conversation: false,
        }
    }

    /// A prompt that offers a closed set of answers
    pub fn menu(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            text: text.into(),
            suggestions,
            closes_conversation: false,
        }
    }

    /// A final message
    pub fn closing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestions: Vec::new(),
            closes_conversation: true,
        }
    }

    pub fn has_menu(&self) -> bool {
        !self.suggestions.is_empty()
    }
}
