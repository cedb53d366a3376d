//! REPL (Read-Eval-Print Loop) for interactive chat

use super::line_input::LineInput;
use chat_application::{ChatSession, Key, SendOutcome, UiEvent};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of input lines kept in the history file.
const HISTORY_CAPACITY: usize = 1000;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Quit,
}

impl ReplCommand {
    /// Parse a REPL command. Only the exact command words are recognized;
    /// any other line, including one starting with `/`, is chat input and
    /// returns `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "/quit" | "/exit" | "/q" => Some(ReplCommand::Quit),
            "/help" | "/h" | "/?" => Some(ReplCommand::Help),
            "/history" => Some(ReplCommand::History),
            _ => None,
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    input: Arc<LineInput>,
    endpoint_url: String,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a REPL driving `session`.
    ///
    /// `input` must be the same field the session reads from.
    pub fn new(
        session: ChatSession,
        input: Arc<LineInput>,
        endpoint_url: impl Into<String>,
    ) -> Self {
        Self {
            session,
            input,
            endpoint_url: endpoint_url.into(),
            history_file: None,
        }
    }

    /// Persist line-editor input history to this file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = &self.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("chat".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if let Some(command) = ReplCommand::parse(&line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }
                    self.process_line(&line).await;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              respond-chat                   │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Endpoint: {}", self.endpoint_url);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /history         - Show completed exchanges");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
                false
            }
            ReplCommand::History => {
                self.print_history();
                false
            }
        }
    }

    fn print_history(&self) {
        let history = self.session.history();
        println!();
        if history.is_empty() {
            println!("{}", "No completed exchanges yet.".dimmed());
        }
        for (i, turn) in history.turns().iter().enumerate() {
            println!("{} {}", format!("[{}] You:", i + 1).cyan().bold(), turn.user);
            println!("{} {}", "    Bot:".green().bold(), turn.bot);
        }
        println!();
    }

    /// Hand a line to the session as if typed and confirmed with Enter.
    async fn process_line(&mut self, line: &str) {
        self.input.set(line);
        match self
            .session
            .handle_event(UiEvent::KeyPress(Key::Enter))
            .await
        {
            SendOutcome::Replied(_) => {}
            SendOutcome::Skipped => debug!("Nothing sent for blank line"),
            // Already logged by the session; the transcript stays silent.
            SendOutcome::Failed(_) => {}
        }
    }
}
