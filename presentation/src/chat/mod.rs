//! Interactive chat module
//!
//! Provides a line-editor based chat that stands in for a messenger:
//! each caregiver name is one session of the absence bot.

mod repl;

pub use repl::{ChatRepl, ReplAction, resolve_input};
