//! Text-generation engine adapters.

pub mod llama_server;
