//! # Stride Memory
//!
//! Append-only, deduplicated, session-scoped conversation logs.
//!
//! The [`ChatStore`] trait is the persistence seam of the step engine; two
//! backends are provided:
//!
//! - **[InMemoryChatStore]**: process-local, for tests and ephemeral runs
//! - **[SqliteChatStore]**: durable, WAL-mode SQLite with an atomic
//!   insert-if-absent dedup guard
//!
//! Both backends enforce the same policies: a `(session, content)` pair is
//! persisted at most once, and only user-visible conversational turns are
//! kept; tool-invocation requests and tool-result messages are dropped.

mod in_memory;
mod sqlite_store;
mod store;

pub use in_memory::InMemoryChatStore;
pub use sqlite_store::SqliteChatStore;
pub use store::ChatStore;
