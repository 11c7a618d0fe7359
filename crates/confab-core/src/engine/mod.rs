//! Engine abstractions for Confab.
//!
//! This module defines the ports the infrastructure layer implements:
//! - `TextGenerator`: RPITIT trait for concrete generation backends
//! - `PromptTemplate`: renders a dialogue snapshot into engine prompt text

pub mod generator;
pub mod template;
