//! Application layer for the kindergarten absence bot
//!
//! This crate contains use cases, port definitions, and per-session
//! conversation ownership. It depends only on the domain layer.

pub mod ports;
pub mod sessions;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    absence_log::{AbsenceLog, AppendReceipt, PersistenceError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    roster_source::{LoadError, RosterSource, StaticRosterSource},
};
pub use sessions::SessionRegistry;
pub use use_cases::load_roster::{LoadRosterOutput, LoadRosterUseCase};
pub use use_cases::report_absence::{InboundMessage, ReportAbsenceError, ReportAbsenceUseCase};
