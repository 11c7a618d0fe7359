//! Main chat loop orchestration.
//!
//! Wires the dialogue window, exchange engine, banner, slash commands,
//! and async input into one session: read a line, dispatch commands,
//! run the exchange, print the outcome, repeat until `/exit` or Ctrl+D.

use std::time::Duration;

use console::style;
use tracing::info;

use confab_core::dialogue::exchange::{ExchangeEngine, ExchangeOutcome};
use confab_core::dialogue::window::DialogueWindow;
use confab_core::engine::generator::TextGenerator;
use confab_core::engine::template::ZephyrTemplate;
use confab_types::chat::SessionInfo;
use confab_types::config::ChatConfig;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Run the interactive chat loop until the user exits.
///
/// One exchange is processed to completion (success or rollback) before
/// the next input is accepted; a failed exchange prints an error and the
/// session continues with the window unchanged.
pub async fn run_chat_loop<G: TextGenerator>(
    config: &ChatConfig,
    generator: G,
) -> anyhow::Result<()> {
    let session = SessionInfo::new(config.model.clone());
    let mut window =
        DialogueWindow::with_labels(config.max_turns, &config.user_label, &config.assistant_label);
    let engine = ExchangeEngine::new(
        generator,
        ZephyrTemplate,
        config.sampling.clone(),
        config.fallback_reply.clone(),
    );

    print_welcome_banner(&config.model, &session.short_id());

    let prompt = format!(
        "  {} ",
        style(format!("{} >", config.user_label)).green().bold()
    );
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    let mut exchanges: u32 = 0;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended. Goodbye!").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D or type /exit to leave, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended. Goodbye!").dim());
                            break;
                        }
                        ChatCommand::Clear => {
                            window.clear();
                            println!("\n  {}\n", style("Conversation history cleared.").dim());
                        }
                        ChatCommand::History => match window.render_history() {
                            Some(history) => {
                                println!("\n  {}", style("Conversation history:").bold());
                                for line in history.lines() {
                                    println!("  {line}");
                                }
                                println!();
                            }
                            None => {
                                println!(
                                    "\n  {}\n",
                                    style("No conversation history yet.").dim()
                                );
                            }
                        },
                    }
                    continue;
                }

                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(Duration::from_millis(80));

                let outcome = engine.run(&mut window, &text).await;
                spinner.finish_and_clear();

                match outcome {
                    ExchangeOutcome::Completed { reply } => {
                        println!(
                            "\n  {} {}\n",
                            style(format!("{} >", config.assistant_label)).cyan().bold(),
                            reply
                        );
                        exchanges += 1;
                    }
                    ExchangeOutcome::Failed { reason } => {
                        eprintln!(
                            "\n  {} Unable to generate a response: {reason}",
                            style("!").red().bold()
                        );
                        eprintln!(
                            "  {}\n",
                            style("Your message was not kept. Type it again to retry, /exit to quit.")
                                .dim()
                        );
                    }
                }
            }
        }
    }

    let elapsed = (chrono::Utc::now() - session.started_at).num_seconds();
    info!(
        session = %session.id,
        exchanges,
        elapsed_s = elapsed,
        "chat session ended"
    );
    Ok(())
}
