//! Core logic for Confab.
//!
//! This crate owns the stateful heart of the chatbot: the bounded
//! [`dialogue::window::DialogueWindow`] and the transactional
//! [`dialogue::exchange::ExchangeEngine`]. It also defines the "ports"
//! the infrastructure layer implements -- [`engine::generator::TextGenerator`]
//! and [`engine::template::PromptTemplate`]. No IO lives here.

pub mod dialogue;
pub mod engine;
