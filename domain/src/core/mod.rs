//! Core domain concepts shared across all subdomains.
//!
//! - [`session_id::SessionId`]: identity of one reporting conversation
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod session_id;
