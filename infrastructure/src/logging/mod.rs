//! Transcript logging: structured conversation events as JSONL.
//!
//! Provides [`JsonlConversationLogger`], an append-only file writer that
//! implements the [`ConversationLogger`](absence_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
