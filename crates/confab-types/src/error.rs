use thiserror::Error;

/// Errors from dialogue window operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// `pop_last` was called on an empty window. This is a contract
    /// violation by the caller: rollback must only run after a user turn
    /// was appended.
    #[error("dialogue window is empty")]
    Empty,
}

/// Errors from text-generation engine operations.
///
/// The exchange protocol never inspects these -- every variant is treated
/// opaquely as "generation failed" and triggers rollback.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine error: {message}")]
    Engine { message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
