//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for absence-bot
#[derive(Parser, Debug)]
#[command(name = "absence-bot")]
#[command(version, about = "Kindergarten absence reporting bot")]
#[command(long_about = r#"
Caregivers report that their child will not come to kindergarten today.

The bot asks for the group, the child's last name, first name and birth
date, checks each answer against the roster, and appends confirmed
reports to a daily CSV file (absent_children_YYYY_MM_DD.csv).

Configuration is loaded from (highest priority first):
1. Command-line flags
2. ABSENCE_<SECTION>__<KEY> environment variables
3. --config <path>     Explicit config file
4. ./absence.toml      Project-level config
5. <config dir>/kindergarten-absence/config.toml   Global config

Example:
  absence-bot --roster children.csv --log-dir ./absences
  absence-bot --config /etc/kindergarten/absence.toml -v
"#)]
pub struct Cli {
    /// Roster CSV file (group, last name, first name, birth date)
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Directory receiving the daily absence files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Append conversation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Session name the REPL starts in
    #[arg(long, value_name = "NAME")]
    pub caregiver: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
