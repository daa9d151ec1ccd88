//! Domain error types

use crate::absence::entities::Field;
use crate::conversation::state::ConversationState;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Step called out of order: expected {expected}, conversation is {actual}")]
    OutOfOrder {
        expected: ConversationState,
        actual: ConversationState,
    },

    #[error("Record is missing {0} and cannot be filed")]
    IncompleteRecord(Field),
}

impl DomainError {
    /// Check if this error was caused by calling a step handler in the wrong state
    pub fn is_out_of_order(&self) -> bool {
        matches!(self, DomainError::OutOfOrder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_display() {
        let error = DomainError::OutOfOrder {
            expected: ConversationState::AwaitingLastName,
            actual: ConversationState::Idle,
        };
        assert_eq!(
            error.to_string(),
            "Step called out of order: expected awaiting_last_name, conversation is idle"
        );
    }

    #[test]
    fn test_is_out_of_order_check() {
        let error = DomainError::OutOfOrder {
            expected: ConversationState::AwaitingGroup,
            actual: ConversationState::Terminated,
        };
        assert!(error.is_out_of_order());
        assert!(!DomainError::IncompleteRecord(Field::BirthDate).is_out_of_order());
    }
}
