//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::config::{DisplayConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SpinnerProgress;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;
use twin_application::{ChatWidget, IgnoreReason, SubmitOutcome};

/// Interactive chat REPL
pub struct ChatRepl {
    widget: Arc<ChatWidget>,
    display: DisplayConfig,
    repl: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(widget: Arc<ChatWidget>) -> Self {
        Self {
            widget,
            display: DisplayConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.repl.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = rl.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), e);
            }
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    if let Some(command) = ReplCommand::parse(&line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }

                    self.process_message(ReplCommand::message_text(&line)).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!(
            "{}",
            ConsoleFormatter::header(&self.display.title, &self.display.subtitle)
        );
        println!();
        if self.widget.is_empty() {
            println!("{}", ConsoleFormatter::welcome());
        }
        println!("{}", "Ask a question... (/help for commands)".dimmed());
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
                println!("{}", ReplCommand::help_text());
                false
            }
            ReplCommand::Session => {
                match self.widget.session_id() {
                    Some(id) => println!("Session: {}", id),
                    None => println!("No session yet (assigned by the first reply)"),
                }
                false
            }
            ReplCommand::History => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(&self.widget.messages())
                );
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&self, line: &str) {
        let outcome = if self.repl.show_progress {
            let progress = SpinnerProgress::new();
            self.widget.submit_with_progress(line, &progress).await
        } else {
            self.widget.submit(line).await
        };

        if let SubmitOutcome::Ignored(IgnoreReason::Busy) = outcome {
            println!("{}", "Still waiting for the previous reply.".dimmed());
            return;
        }

        if let Some(reply) = outcome.reply() {
            let rendered = ConsoleFormatter::format_message(reply);
            println!();
            if matches!(outcome, SubmitOutcome::Failed(_)) {
                println!("{}", rendered.yellow());
            } else {
                println!("{}", rendered);
            }
        }
    }
}
