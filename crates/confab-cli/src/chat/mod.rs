//! Interactive CLI chat experience for Confab.
//!
//! This module implements the chat loop: welcome banner, slash commands,
//! async readline input, and exchange orchestration against the dialogue
//! window. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
