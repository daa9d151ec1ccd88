//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording conversation events
//! (report started, field accepted or rejected, absence recorded, ...) to a
//! structured transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! conversation transcript in a machine-readable format (JSONL).

use absence_domain::SessionId;
use serde_json::Value;

/// A structured conversation event for logging.
///
/// Each event has a type string, the session it belongs to, and a JSON
/// payload containing event-specific fields.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "field_accepted", "absence_recorded").
    pub event_type: &'static str,
    /// Session the event belongs to.
    pub session: SessionId,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, session: SessionId, payload: Value) -> Self {
        Self {
            event_type,
            session,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible; logging failures
/// never reach the conversation.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
