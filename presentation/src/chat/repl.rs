//! REPL (Read-Eval-Print Loop) for the absence conversation

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::ReplyFormatter;
use absence_application::{AbsenceLog, InboundMessage, ReportAbsenceUseCase};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::collections::HashMap;
use std::path::PathBuf;

const HISTORY_CAPACITY: usize = 1000;

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Blank line
    Nothing,
    Quit,
    Help,
    /// Show the current session
    Who,
    /// Continue as another caregiver
    SwitchSession(String),
    /// A REPL command used wrongly
    Usage(&'static str),
    /// Send text to the bot
    Send(String),
}

/// Map a typed line to an action.
///
/// A bare number picks the matching entry of the last menu shown in
/// this session; numbers outside the menu are sent as typed. Slash
/// commands the REPL does not own (`/start`, `/cancel`, ...) go to the bot.
/// Text for the bot is sent unmodified.
pub fn resolve_input(raw: &str, menu: &[String]) -> ReplAction {
    let line = raw.trim();
    if line.is_empty() {
        return ReplAction::Nothing;
    }

    if let Ok(choice) = line.parse::<usize>()
        && let Some(option) = choice.checked_sub(1).and_then(|i| menu.get(i))
    {
        return ReplAction::Send(option.clone());
    }

    let mut words = line.split_whitespace();
    match words.next().unwrap_or_default() {
        "/quit" | "/exit" | "/q" => ReplAction::Quit,
        "/help" | "/h" | "/?" => ReplAction::Help,
        "/who" => ReplAction::Who,
        "/as" => match words.next() {
            Some(name) => ReplAction::SwitchSession(name.to_string()),
            None => ReplAction::Usage("/as <name>"),
        },
        _ => ReplAction::Send(raw.to_string()),
    }
}

/// File-backed history at `path`, creating its directory first.
fn open_history(path: PathBuf) -> Result<FileBackedHistory, String> {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        return Err(format!("cannot create {}: {}", parent.display(), e));
    }
    FileBackedHistory::with_file(HISTORY_CAPACITY, path).map_err(|e| e.to_string())
}

/// Interactive chat REPL
pub struct ChatRepl<L: AbsenceLog + 'static> {
    use_case: ReportAbsenceUseCase<L>,
    formatter: ConsoleFormatter,
    config: ReplConfig,
    session: String,
    /// Last menu shown per session
    menus: HashMap<String, Vec<String>>,
}

impl<L: AbsenceLog + 'static> ChatRepl<L> {
    /// Create a new ChatRepl
    pub fn new(use_case: ReportAbsenceUseCase<L>, config: ReplConfig) -> Self {
        Self {
            use_case,
            formatter: ConsoleFormatter::new(config.color),
            session: config.caregiver.clone(),
            config,
            menus: HashMap::new(),
        }
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_file.clone() else {
            return editor;
        };

        match open_history(path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                eprintln!("History disabled: {}", e);
                editor
            }
        }
    }

    fn prompt(&self) -> DefaultPrompt {
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.session.clone()),
            DefaultPromptSegment::Empty,
        )
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        self.print_welcome();

        loop {
            let signal = editor.read_line(&self.prompt())?;

            let line = match signal {
                Signal::Success(line) => line,
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            };

            let menu = self.menus.get(&self.session).cloned().unwrap_or_default();
            match resolve_input(&line, &menu) {
                ReplAction::Nothing => {}
                ReplAction::Quit => {
                    println!("Bye!");
                    break;
                }
                ReplAction::Help => self.print_help(),
                ReplAction::Who => println!(
                    "Talking as {} ({} open conversation(s))",
                    self.session.bold(),
                    self.use_case.active_sessions()
                ),
                ReplAction::SwitchSession(name) => {
                    println!("Now talking as {}", name.bold());
                    self.session = name;
                }
                ReplAction::Usage(usage) => println!("Usage: {}", usage),
                ReplAction::Send(text) => self.send(text).await,
            }
        }

        Ok(())
    }

    async fn send(&mut self, text: String) {
        let message = InboundMessage::new(self.session.clone(), text);

        match self.use_case.handle(message).await {
            Ok(reply) => {
                println!("{}", self.formatter.format_bot_line(&reply));
                self.menus.insert(self.session.clone(), reply.suggestions);
            }
            Err(e) => {
                eprintln!("{}", self.formatter.format_error(&e));
                self.menus.remove(&self.session);
            }
        }
        println!();
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Kindergarten Absence Bot - Chat       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Groups: {}",
            self.use_case.groups().labels().join(", ")
        );
        println!("Talking as: {}", self.session);
        println!();
        self.print_help();
    }

    fn print_help(&self) {
        println!("Bot commands:");
        println!("  /start          - Report an absence");
        println!("  /cancel         - Stop the current report");
        println!("  <number>        - Pick an entry of the last menu");
        println!();
        println!("REPL commands:");
        println!("  /as <name>      - Continue as another caregiver");
        println!("  /who            - Show the current caregiver");
        println!("  /help, /h, /?   - Show this help");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }
}
