//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod absence_log;
pub mod conversation_logger;
pub mod roster_source;
