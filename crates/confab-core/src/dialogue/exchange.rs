//! Turn-assembly protocol: one transactional exchange against the window.
//!
//! An exchange appends the user's turn, renders the snapshot to a prompt,
//! calls the generator, and appends the reply. When generation fails the
//! pending user turn is popped again, so a failed exchange leaves the
//! window as if the message had never been sent. Without that rollback a
//! dangling user turn would make the next snapshot show two consecutive
//! user turns, which chat templates treat as malformed input.

use tracing::{debug, warn};

use confab_types::chat::Role;
use confab_types::config::SamplingParams;
use confab_types::engine::GenerationRequest;

use crate::engine::generator::TextGenerator;
use crate::engine::template::PromptTemplate;

use super::window::DialogueWindow;

/// Result of one exchange.
///
/// Generation failure is an expected outcome, not an exception: the
/// caller branches on this enum and the session continues either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// The reply was generated and both turns persist in the window.
    Completed { reply: String },
    /// Generation failed; the window was rolled back to its pre-exchange
    /// state and no assistant turn was stored.
    Failed { reason: String },
}

/// Orchestrates exchanges against a [`DialogueWindow`].
///
/// Holds the generator and template ports plus the sampling configuration
/// and the fallback reply for empty generations. The window itself is
/// passed in by the caller -- one engine can serve a session without
/// owning its state.
pub struct ExchangeEngine<G, T> {
    generator: G,
    template: T,
    sampling: SamplingParams,
    fallback_reply: String,
}

impl<G: TextGenerator, T: PromptTemplate> ExchangeEngine<G, T> {
    pub fn new(generator: G, template: T, sampling: SamplingParams, fallback_reply: String) -> Self {
        Self {
            generator,
            template,
            sampling,
            fallback_reply,
        }
    }

    /// Run one exchange: user text in, assistant reply (or failure) out.
    ///
    /// Empty or whitespace-only input is rejected before the window is
    /// touched. On generation failure the pending user turn is popped iff
    /// it is still the most recent turn -- the guard keeps a double
    /// rollback, or a rollback racing an unrelated assistant turn, from
    /// removing the wrong entry. A turn already evicted by the append is
    /// not resurrected.
    pub async fn run(&self, window: &mut DialogueWindow, user_text: &str) -> ExchangeOutcome {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return ExchangeOutcome::Failed {
                reason: "empty user input".to_string(),
            };
        }

        window.push("user", user_text);

        let snapshot = window.snapshot();
        let prompt = self.template.render(&snapshot);
        let request = GenerationRequest::new(
            prompt,
            self.sampling.clone(),
            self.template.stop_sequences(),
        );

        match self.generator.generate(&request).await {
            Ok(text) => {
                let reply = if text.trim().is_empty() {
                    self.fallback_reply.clone()
                } else {
                    text.trim().to_string()
                };
                window.push("bot", &reply);
                debug!(generator = self.generator.name(), turns = window.len(), "exchange completed");
                ExchangeOutcome::Completed { reply }
            }
            Err(err) => {
                warn!(generator = self.generator.name(), error = %err, "generation failed, rolling back user turn");
                if window.last_is(Role::User) {
                    // The guard above makes the window non-empty here.
                    let _ = window.pop_last();
                }
                ExchangeOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
