//! Conversation states

use crate::absence::entities::Field;
use serde::{Deserialize, Serialize};

/// Where a reporting conversation currently stands
///
/// The sequence is linear: `Idle → AwaitingGroup → AwaitingLastName →
/// AwaitingFirstName → AwaitingBirthDate → Terminated`. `/start` restarts
/// from any state; `Terminated` is reached on success, on a failed check
/// and on cancellation alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingGroup,
    AwaitingLastName,
    AwaitingFirstName,
    AwaitingBirthDate,
    Terminated,
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::AwaitingGroup => "awaiting_group",
            ConversationState::AwaitingLastName => "awaiting_last_name",
            ConversationState::AwaitingFirstName => "awaiting_first_name",
            ConversationState::AwaitingBirthDate => "awaiting_birth_date",
            ConversationState::Terminated => "terminated",
        }
    }

    /// The field this state waits for, if any
    pub fn expected_field(&self) -> Option<Field> {
        match self {
            ConversationState::AwaitingGroup => Some(Field::Group),
            ConversationState::AwaitingLastName => Some(Field::LastName),
            ConversationState::AwaitingFirstName => Some(Field::FirstName),
            ConversationState::AwaitingBirthDate => Some(Field::BirthDate),
            ConversationState::Idle | ConversationState::Terminated => None,
        }
    }

    /// True while a report is being filled in
    pub fn is_in_progress(&self) -> bool {
        self.expected_field().is_some()
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, ConversationState::Terminated)
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
