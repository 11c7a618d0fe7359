//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a session starts, showing the model,
//! session id, and a hint about slash commands.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(model: &str, session_id: &str) {
    println!();
    println!("  {}", style("confab").cyan().bold());
    println!(
        "  {}",
        style("Local command-line chatbot. Type your messages below.").dim()
    );
    println!();
    println!("  {}    {}", style("Model:").bold(), style(model).dim());
    println!("  {}  {}", style("Session:").bold(), style(session_id).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
