//! Slash command parsing for the chat loop.
//!
//! Exactly four commands are recognized, case-insensitively: `/exit`,
//! `/help`, `/clear`, `/history`. Any other input -- including unknown
//! slash-prefixed strings -- is NOT a command and goes to the model as a
//! user turn.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the conversation history.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Show the conversation history.
    History,
}

/// Parse user input as a slash command.
///
/// Returns `None` for anything that is not one of the four commands.
pub fn parse(input: &str) -> Option<ChatCommand> {
    match input.trim().to_lowercase().as_str() {
        "/help" => Some(ChatCommand::Help),
        "/clear" => Some(ChatCommand::Clear),
        "/exit" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        _ => None,
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/exit").cyan(), "Exit the chatbot");
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}  {}", style("/history").cyan(), "Show conversation history");
    println!("  {}    {}", style("/clear").cyan(), "Clear conversation history");
    println!();
    println!("  {}", style("Anything else is sent to the model.").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse("/EXIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("/History"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse("  /help  "), Some(ChatCommand::Help));
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse("hello world"), None);
    }

    #[test]
    fn test_unknown_slash_input_is_not_a_command() {
        // "/foo" is a user turn, not an unknown-command error.
        assert_eq!(parse("/foo"), None);
        assert_eq!(parse("/exit now"), None);
    }
}
