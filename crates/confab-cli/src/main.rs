//! Confab CLI entry point.
//!
//! Binary name: `confab`
//!
//! Parses CLI arguments, initializes tracing, loads configuration, builds
//! the completion-server generator, and hands control to the chat loop.

mod chat;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use confab_infra::config::{default_config_path, load_config};
use confab_infra::engine::llama_server::LlamaServerGenerator;
use confab_types::config::ChatConfig;

/// Local command-line chatbot with a bounded conversation window.
#[derive(Parser)]
#[command(name = "confab", version, about, long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to ~/.confab/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Completion server base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Model name shown in the banner (overrides config).
    #[arg(long)]
    model: Option<String>,

    /// Number of logical turns kept in the dialogue window (overrides config).
    #[arg(long)]
    max_turns: Option<usize>,

    /// Suppress all output except errors.
    #[arg(long)]
    quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,confab_core=debug,confab_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut config = match cli.config.or_else(default_config_path) {
        Some(path) => load_config(&path).await,
        None => ChatConfig::default(),
    };

    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_turns = max_turns;
    }
    // The window must hold at least one logical turn.
    config.max_turns = config.max_turns.max(1);

    let generator = LlamaServerGenerator::new(&config.base_url);
    chat::loop_runner::run_chat_loop(&config, generator).await
}
