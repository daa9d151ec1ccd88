//! Absence report domain.
//!
//! - [`entities::CandidateRecord`]: the report being filled in
//! - [`entities::AbsenceLogEntry`]: a persisted row of a daily absence file
//! - [`group::GroupOptions`]: the closed set of groups to pick from

pub mod entities;
pub mod group;
