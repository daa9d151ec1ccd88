//! Output formatting for bot replies

pub mod console;
pub mod formatter;
