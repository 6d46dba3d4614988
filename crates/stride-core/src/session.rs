//! Session identity and per-step configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of one durable conversation log.
///
/// The engine treats the id as opaque; it exists to partition the chat store
/// and appears verbatim in backend keys and log lines, hence the restricted
/// character set. Sessions come into being on first write, there is no
/// explicit create step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

/// Rejected session ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSessionId {
    #[error("session id must not be empty")]
    Empty,
    #[error("session id is {0} characters, limit is 128")]
    TooLong(usize),
    #[error("session id '{0}' has characters outside alphanumerics, '_', '-', '.' and ':'")]
    InvalidChars(String),
}

impl SessionId {
    pub const MAX_LENGTH: usize = 128;

    /// Validate and wrap a session id.
    ///
    /// Accepts 1 to 128 alphanumeric characters, underscores, hyphens, dots
    /// and colons after trimming whitespace, which leaves room for composite
    /// ids like `user:42.chat-7`.
    pub fn new(id: &str) -> Result<Self, InvalidSessionId> {
        let id = id.trim();
        if id.is_empty() {
            return Err(InvalidSessionId::Empty);
        }
        if id.len() > Self::MAX_LENGTH {
            return Err(InvalidSessionId::TooLong(id.len()));
        }
        let allowed = |c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':');
        if id.chars().all(allowed) {
            Ok(SessionId(id.to_owned()))
        } else {
            Err(InvalidSessionId::InvalidChars(id.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = InvalidSessionId;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        SessionId::new(&id)
    }
}

/// Configuration bag passed through every step invocation.
///
/// The decision unit receives the whole bag; the engine itself only reads
/// `session_id`, and only when memory is enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepConfig {
    /// Session scoping the durable conversation log. Required by
    /// memory-backed execution, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,

    /// Free-form metadata forwarded to the decision unit untouched.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl StepConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a session id.
    pub fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Attach one metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
