//! Reporting conversation domain.
//!
//! - [`machine::Conversation`]: the per-session state machine
//! - [`state::ConversationState`]: where a conversation stands
//! - [`input::Inbound`]: classified inbound message
//! - [`reply::Reply`]: outbound text with optional menu

pub mod input;
pub mod machine;
pub mod reply;
pub mod state;
