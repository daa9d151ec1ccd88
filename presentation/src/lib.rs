//! Presentation layer for the kindergarten absence bot
//!
//! This crate contains CLI definitions, reply formatting and the
//! interactive chat that drives the reporting conversation.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::ReplyFormatter;
