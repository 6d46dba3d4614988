//! Error taxonomy for the step engine.
//!
//! Failures are split by concern: transport failures from the decision unit
//! (retryable, absorbed by the executor), store failures from the
//! persistence layer (logged and swallowed relative to the conversational
//! flow), and caller errors in step configuration.

use thiserror::Error;

/// Transport-level failure raised by a decision-unit call.
///
/// These are the only failures the executor retries; once the retry budget
/// is exhausted they are converted into a fixed fallback message, never
/// re-raised to the caller.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The remote call failed outright.
    #[error("decision unit call failed: {reason}")]
    CallFailed { reason: String },

    /// The remote call did not complete in time.
    #[error("decision unit call timed out after {millis}ms")]
    Timeout { millis: u64 },
}

/// Failure in the durable conversation log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store could not be reached or opened.
    #[error("chat store connection failed: {reason}")]
    Connection { reason: String },

    /// A message payload could not be serialized or deserialized.
    #[error("message serialization failed for session '{session}': {details}")]
    Serialization { session: String, details: String },

    /// The store rejected a write.
    #[error("write conflict in session '{session}': {details}")]
    WriteConflict { session: String, details: String },

    /// A read query failed.
    #[error("query failed for session '{session}': {details}")]
    Query { session: String, details: String },
}

/// Caller errors in step configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// Memory-backed execution requires a session id in the configuration.
    #[error("step configuration is missing a session id")]
    MissingSessionId,
}
