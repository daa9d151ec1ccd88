//! Roster domain.
//!
//! - [`entities::Child`]: one known child
//! - [`entities::Roster`]: the immutable set of known children
//! - [`matching`]: progressive validation of a candidate record against the roster

pub mod entities;
pub mod matching;
