//! # Stride Runtime
//!
//! Execution engine for one conversational step.
//!
//! [`StepExecutor`] drives a bounded-retry invocation of a decision unit
//! and normalizes the result; [`MemoryStepExecutor`] composes it with a
//! [`ChatStore`](stride_memory::ChatStore) so every turn is transparently
//! loaded from and appended to the session's durable history.
//!
//! Callers always receive a well-formed message: transport failures are
//! absorbed into a fixed fallback reply and persistence failures are logged
//! and swallowed, never surfaced as exceptions.

mod executor;
mod memory_executor;

pub use executor::{CORRECTIVE_PROMPT, FALLBACK_REPLY, StepExecutor, StepOutcome};
pub use memory_executor::MemoryStepExecutor;
