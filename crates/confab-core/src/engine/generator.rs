//! TextGenerator trait definition.
//!
//! This is the abstraction the exchange protocol calls through. A
//! generator takes a fully rendered prompt and returns the next turn's
//! text, or fails. Implementations live in confab-infra (e.g.,
//! `LlamaServerGenerator`); tests use in-module mocks.

use confab_types::engine::GenerationRequest;
use confab_types::error::EngineError;

/// Trait for text-generation backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The
/// exchange protocol is generic over this trait, so no boxed dynamic
/// dispatch is needed.
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "llama-server").
    fn name(&self) -> &str;

    /// Generate the next turn's text for a rendered prompt.
    ///
    /// The call blocks the session loop until it resolves; there is no
    /// cancellation mid-exchange. Any error is treated by the caller as an
    /// opaque "generation failed" signal.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<String, EngineError>> + Send;
}
