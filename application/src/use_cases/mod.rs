//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_roster;
pub mod report_absence;
