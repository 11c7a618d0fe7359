//! Shared data types for Confab.
//!
//! This crate holds the plain data shapes used across the workspace:
//! dialogue turns and roles, session identity, configuration, engine
//! request types, and error enums. It has no IO and no business logic --
//! the other crates depend on it, never the other way around.

pub mod chat;
pub mod config;
pub mod engine;
pub mod error;
