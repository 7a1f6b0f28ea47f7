//! Slash commands understood by the chat REPL

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Session,
    History,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line as a command. Returns `None` for ordinary chat input.
    ///
    /// Only a single `/word` token counts as a command, so text such as
    /// `/etc/hosts?` or `/usr is full` goes to the chat as typed.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let name = line.strip_prefix('/')?;
        let is_token = name == "?"
            || (!name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        if !is_token {
            return None;
        }
        let command = match line {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/session" => ReplCommand::Session,
            "/history" => ReplCommand::History,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        };
        Some(command)
    }

    /// Text to send for a non-command line; a leading `//` escapes one slash.
    pub fn message_text(line: &str) -> &str {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") {
            &trimmed[1..]
        } else {
            line
        }
    }

    /// Help text listing every command
    pub fn help_text() -> &'static str {
        "Commands:\n  \
         /help, /h, /?     - Show this help\n  \
         /session          - Show the current session id\n  \
         /history          - Reprint the conversation\n  \
         /quit, /exit, /q  - Exit chat\n  \
         //text            - Send text that starts with /\n"
    }
}
