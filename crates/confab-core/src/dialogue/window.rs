//! Bounded dialogue window with automatic eviction.
//!
//! `DialogueWindow` keeps the last N logical turns (2N messages) of a
//! conversation in FIFO order. Appending past capacity evicts the oldest
//! message rather than failing; the window length never exceeds capacity.

use std::collections::VecDeque;

use confab_types::chat::{Role, Turn};
use confab_types::error::BufferError;

/// Fixed-capacity store for recent conversation turns.
///
/// Owned by exactly one session loop -- there is one writer and no
/// concurrent readers, so no interior locking. Mutation happens only
/// through [`push`](Self::push), [`pop_last`](Self::pop_last), and
/// [`clear`](Self::clear).
#[derive(Debug, Clone)]
pub struct DialogueWindow {
    turns: VecDeque<Turn>,
    capacity: usize,
    user_label: String,
    assistant_label: String,
}

impl DialogueWindow {
    /// Create a window holding the last `max_turns` logical turns.
    ///
    /// Capacity is `2 * max_turns`: one user and one assistant message per
    /// logical turn. `max_turns` must be at least 1.
    pub fn new(max_turns: usize) -> Self {
        Self::with_labels(max_turns, "User", "Bot")
    }

    /// Create a window with custom display labels for the history view.
    pub fn with_labels(max_turns: usize, user_label: &str, assistant_label: &str) -> Self {
        debug_assert!(max_turns > 0, "max_turns must be positive");
        let capacity = max_turns * 2;
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
            user_label: user_label.to_string(),
            assistant_label: assistant_label.to_string(),
        }
    }

    /// Append a message, normalizing the role label and trimming content.
    ///
    /// When the append would exceed capacity the oldest message is evicted.
    /// Eviction is defined behavior, not a failure -- a full window simply
    /// forgets its oldest turn. A single push evicts at most one message,
    /// since capacity is enforced eagerly on every call.
    pub fn push(&mut self, role_label: &str, content: &str) {
        self.turns.push_back(Turn::new(role_label, content));
        while self.turns.len() > self.capacity {
            if let Some(evicted) = self.turns.pop_front() {
                tracing::debug!(role = %evicted.role, "evicted oldest turn at capacity");
            }
        }
    }

    /// An immutable ordered copy of the current turns.
    ///
    /// The copy shares no state with the window: callers cannot observe or
    /// cause later mutation through it. This is the contract surface handed
    /// to the template renderer.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    /// Whether the most recent turn has the given role.
    ///
    /// Returns false for an empty window. Used as the rollback guard.
    pub fn last_is(&self, role: Role) -> bool {
        self.turns.back().map(|t| t.role == role).unwrap_or(false)
    }

    /// Remove and return the most recent turn.
    ///
    /// # Errors
    ///
    /// `BufferError::Empty` when the window has no turns. Rollback must
    /// only be invoked after a user turn was appended, so hitting this is
    /// a caller contract violation.
    pub fn pop_last(&mut self) -> Result<Turn, BufferError> {
        self.turns.pop_back().ok_or(BufferError::Empty)
    }

    /// Human-readable history, one `<Label>: <content>` line per turn.
    ///
    /// Returns `None` for an empty window so callers can tell "no history"
    /// apart from a history that happens to render to an empty string.
    pub fn render_history(&self) -> Option<String> {
        if self.turns.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .turns
            .iter()
            .map(|turn| {
                let label = match turn.role {
                    Role::User => &self.user_label,
                    Role::Assistant => &self.assistant_label,
                };
                format!("{label}: {}", turn.content)
            })
            .collect();
        Some(lines.join("\n"))
    }

    /// Discard all turns. Idempotent.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Number of messages currently stored.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the window holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Maximum number of messages the window will hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
