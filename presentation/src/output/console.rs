//! Console output formatter for the chat transcript

use chrono::Local;
use colored::Colorize;
use twin_domain::{Message, Role};

/// Formats transcript pieces for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown at the top of an interactive session
    pub fn header(title: &str, subtitle: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{:^60}\n{:^60}\n{}",
            line.cyan(),
            title.bold(),
            subtitle.dimmed(),
            line.cyan()
        )
    }

    /// Greeting shown while the transcript is still empty
    pub fn welcome() -> String {
        format!(
            "{}\n{}\n",
            "Welcome".cyan().bold(),
            "How can I help you today?".dimmed()
        )
    }

    /// Format one message with its role label and local time
    pub fn format_message(message: &Message) -> String {
        let time = message
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();

        let label = match message.role {
            Role::User => "You".green().bold(),
            Role::Assistant => "Twin".cyan().bold(),
        };

        format!(
            "{} {}\n{}\n",
            label,
            time.dimmed(),
            Self::indent(&message.content, "  ")
        )
    }

    /// Format the whole transcript, oldest message first
    pub fn format_transcript(messages: &[Message]) -> String {
        if messages.is_empty() {
            return Self::welcome();
        }
        messages
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the transcript as JSON
    pub fn format_json(messages: &[Message]) -> String {
        serde_json::to_string_pretty(messages).unwrap_or_else(|_| "[]".to_string())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use twin_domain::MessageIdGenerator;

    fn plain() {
        colored::control::set_override(false);
    }

    fn transcript() -> Vec<Message> {
        let mut ids = MessageIdGenerator::new();
        let now = Utc::now();
        vec![
            Message::new(ids.next_at(now), Role::User, "Hello", now),
            Message::new(ids.next_at(now), Role::Assistant, "Hi there\nHow can I help?", now),
        ]
    }

    #[test]
    fn test_empty_transcript_shows_welcome() {
        plain();
        let output = ConsoleFormatter::format_transcript(&[]);
        assert!(output.contains("Welcome"));
        assert!(output.contains("How can I help you today?"));
    }

    #[test]
    fn test_transcript_keeps_order_and_labels() {
        plain();
        let output = ConsoleFormatter::format_transcript(&transcript());
        let you = output.find("You").unwrap();
        let twin = output.find("Twin").unwrap();
        assert!(you < twin);
        assert!(output.contains("  Hi there\n  How can I help?"));
    }

    #[test]
    fn test_json_output_is_array_of_messages() {
        let json = ConsoleFormatter::format_json(&transcript());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["role"], "user");
        assert_eq!(value[1]["content"], "Hi there\nHow can I help?");
    }

    #[test]
    fn test_header_contains_title_and_subtitle() {
        plain();
        let header = ConsoleFormatter::header("Chat with Ada's Twin", "AI-Powered Digital Assistant");
        assert!(header.contains("Chat with Ada's Twin"));
        assert!(header.contains("AI-Powered Digital Assistant"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
