//! Domain layer for the kindergarten absence bot
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Roster
//!
//! The immutable set of known children. A report is only filed for a child
//! that matches a roster entry on group, last name, first name and birth date.
//!
//! ## Conversation
//!
//! A caregiver reports an absence through a fixed sequence of prompts:
//!
//! - **Group**: picked from a closed menu
//! - **Last name / first name**: free text, checked against the roster as typed
//! - **Birth date**: free text, must complete an exact roster match
//!
//! The first answer that cannot belong to any child ends the conversation.

pub mod absence;
pub mod config;
pub mod conversation;
pub mod core;
pub mod prompt;
pub mod roster;

// Re-export commonly used types
pub use absence::{
    entities::{AbsenceLogEntry, CandidateRecord, Field, LOG_HEADER},
    group::{GroupOption, GroupOptions},
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use conversation::{
    input::{CANCEL_COMMAND, Inbound, START_COMMAND},
    machine::{Conversation, Effect, Outcome, StepContext, Transition},
    reply::Reply,
    state::ConversationState,
};
pub use core::{error::DomainError, session_id::SessionId};
pub use prompt::ReplyTemplate;
pub use roster::entities::{Child, Roster};
