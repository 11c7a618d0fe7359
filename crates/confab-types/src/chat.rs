//! Dialogue turn and session types for Confab.
//!
//! A conversation is an ordered sequence of [`Turn`] records, each carrying
//! a canonical [`Role`] and trimmed text content. [`SessionInfo`] identifies
//! one interactive session for display and logging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Canonical speaker role of a dialogue turn.
///
/// Only these two values are representable once a raw label has passed
/// through [`Role::from_label`]. The snapshot handed to the template
/// renderer serializes them lowercase (`"user"` / `"assistant"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Normalize a raw role label to a canonical role.
    ///
    /// Case-insensitive: `"bot"` maps to [`Role::Assistant`]; **every**
    /// other label -- including the literal `"assistant"` -- maps to
    /// [`Role::User`]. This coarse mapping is intentionally preserved from
    /// the behavior this crate replaces: callers injecting an assistant
    /// turn must pass exactly `"bot"`. Use the [`FromStr`] impl instead
    /// when a validating parse is wanted.
    pub fn from_label(label: &str) -> Role {
        if label.eq_ignore_ascii_case("bot") {
            Role::Assistant
        } else {
            Role::User
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    /// Strict, validating parse: accepts `"user"`, `"assistant"`, or
    /// `"bot"` (case-insensitive) and rejects anything else. The dialogue
    /// window's write path deliberately does NOT use this -- see
    /// [`Role::from_label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" | "bot" => Ok(Role::Assistant),
            other => Err(format!("invalid role label: '{other}'")),
        }
    }
}

/// One message in the dialogue window.
///
/// Content is trimmed on construction; the `{role, content}` shape is the
/// contract surface handed to the external template renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Build a turn from a raw role label and untrimmed content.
    pub fn new(role_label: &str, content: &str) -> Self {
        Self {
            role: Role::from_label(role_label),
            content: content.trim().to_string(),
        }
    }
}

/// Identity of one interactive chat session.
///
/// Sessions are in-memory only: created at startup, destroyed at exit,
/// never persisted. The id appears in the welcome banner and in logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub model: String,
    pub started_at: DateTime<Utc>,
}

impl SessionInfo {
    /// Start a new session for the given model.
    pub fn new(model: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            model,
            started_at: Utc::now(),
        }
    }

    /// First eight characters of the session id, for banner display.
    pub fn short_id(&self) -> String {
        let s = self.id.to_string();
        s[..8.min(s.len())].to_string()
    }
}
