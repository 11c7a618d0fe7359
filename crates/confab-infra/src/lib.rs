//! Infrastructure adapters for Confab.
//!
//! Implements the ports defined in `confab-core` against the outside
//! world: the llama.cpp completion-server HTTP client and TOML config
//! loading from the user's home directory.

pub mod config;
pub mod engine;
