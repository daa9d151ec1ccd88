//! CLI entrypoint for the kindergarten absence bot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use absence_application::{
    ConversationLogger, LoadRosterUseCase, NoConversationLogger, ReportAbsenceUseCase,
};
use absence_infrastructure::{
    ConfigLoader, CsvAbsenceLog, CsvRosterSource, FileConfig, JsonlConversationLogger,
};
use absence_presentation::{ChatRepl, Cli, ReplConfig};
use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    apply_overrides(&mut config, &cli);

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_tracing(cli.verbose, &config)?;

    info!("Starting kindergarten absence bot");

    let issues = config.validate();
    let mut errors = Vec::new();
    for issue in issues {
        if issue.is_error() {
            errors.push(issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  - {}", errors.join("\n  - "));
    }

    // === Dependency Injection ===
    let groups = config.conversation.to_group_options();

    let roster_path = expand_home(&config.roster.path);
    let loaded = LoadRosterUseCase::new(CsvRosterSource::new(&roster_path))
        .execute(&groups)
        .with_context(|| format!("Could not load the roster from {}", roster_path.display()))?;

    let log_dir = expand_home(&config.absence_log.directory);
    let absence_log = Arc::new(CsvAbsenceLog::new(&log_dir));
    info!("Absences are written to {}", log_dir.display());

    let use_case = ReportAbsenceUseCase::new(loaded.roster, absence_log)
        .with_groups(groups)
        .with_conversation_logger(transcript(&config));

    let repl_config = ReplConfig {
        history_file: config
            .repl
            .history_file
            .as_deref()
            .map(expand_home)
            .or_else(ConfigLoader::default_history_path),
        color: config.repl.color && !cli.no_color,
        caregiver: config.repl.caregiver.clone(),
    };

    let mut repl = ChatRepl::new(use_case, repl_config);
    repl.run().await?;

    Ok(())
}

/// Command-line flags win over every config source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(path) = &cli.roster {
        config.roster.path = path.to_string_lossy().into_owned();
    }
    if let Some(dir) = &cli.log_dir {
        config.absence_log.directory = dir.to_string_lossy().into_owned();
    }
    if let Some(path) = &cli.transcript {
        config.transcript.path = Some(path.to_string_lossy().into_owned());
    }
    if let Some(name) = &cli.caregiver {
        config.repl.caregiver = name.clone();
    }
}

/// Initialize logging based on verbosity level.
///
/// With `[logging] directory` set, output goes to a daily-rolling file.
fn init_tracing(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let Some(directory) = config.logging.directory.as_deref() else {
        subscriber.init();
        return Ok(None);
    };

    let directory = expand_home(directory);
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Could not create log directory {}", directory.display()))?;
    let appender = tracing_appender::rolling::daily(&directory, &config.logging.file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    subscriber.with_ansi(false).with_writer(writer).init();

    Ok(Some(guard))
}

fn transcript(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = config.transcript.path.as_deref() else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(expand_home(path)) {
        Some(logger) => {
            info!("Transcript: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
