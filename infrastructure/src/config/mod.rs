//! Configuration file loading for the absence bot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `ABSENCE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./absence.toml` or `./.absence.toml`
//! 4. Global: `<config dir>/kindergarten-absence/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileAbsenceLogConfig, FileConfig, FileConversationConfig, FileLoggingConfig, FileReplConfig,
    FileRosterConfig, FileTranscriptConfig,
};
pub use loader::ConfigLoader;
