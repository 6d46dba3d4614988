//! The chat store trait and the shared dedup-key derivation.

use sha2::{Digest, Sha256};

use stride_core::error::StoreError;
use stride_core::message::Message;
use stride_core::session::SessionId;

/// Append-only, deduplicated, session-scoped log of exchanged messages.
///
/// Within a session, message order is the write order; insertion order is
/// the only ordering guarantee. Appending a message whose serialized content
/// already exists in the session is a successful no-op, which guards against
/// duplicate persistence when an upstream retry re-delivers the same
/// exchange.
///
/// Messages that request tool invocations, and tool-result messages, are
/// not persisted: the durable log keeps only user-visible conversational
/// turns.
pub trait ChatStore: Send + Sync {
    /// Append a message to the session's log, creating the session on first
    /// write. Duplicate content and non-conversational messages are skipped
    /// silently.
    fn append(&self, session: &SessionId, message: &Message) -> Result<(), StoreError>;

    /// Load the session's messages, oldest first. An unknown session yields
    /// an empty sequence.
    fn load(&self, session: &SessionId) -> Result<Vec<Message>, StoreError>;

    /// Truncate the session's entire sequence.
    fn clear(&self, session: &SessionId) -> Result<(), StoreError>;
}

/// Serialize a message to its canonical persisted payload.
pub(crate) fn serialize_payload(
    session: &SessionId,
    message: &Message,
) -> Result<String, StoreError> {
    serde_json::to_string(message).map_err(|err| StoreError::Serialization {
        session: session.as_str().to_string(),
        details: err.to_string(),
    })
}

/// Deserialize a persisted payload back into a message.
pub(crate) fn deserialize_payload(
    session: &SessionId,
    payload: &str,
) -> Result<Message, StoreError> {
    serde_json::from_str(payload).map_err(|err| StoreError::Serialization {
        session: session.as_str().to_string(),
        details: err.to_string(),
    })
}

/// Derive the content-based dedup key for a serialized payload.
pub(crate) fn dedup_key(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    format!("{:x}", hasher.finalize())
}
