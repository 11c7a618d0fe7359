//! Bounded dialogue state and the turn-assembly protocol.
//!
//! `window` holds the fixed-capacity turn store; `exchange` orchestrates
//! one user-input -> generation -> reply cycle against it, rolling the
//! window back when generation fails.

pub mod exchange;
pub mod window;
