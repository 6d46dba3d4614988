//! # Stride
//!
//! Stride is a small engine for driving one conversational step of an
//! autonomous agent: it binds a decision unit (a remote model service) to a
//! set of tools, retries transport failures within a bounded budget, and
//! keeps a deduplicated per-session log of the exchanged messages.
//!
//! ## Core Components
//!
//! - **[DecisionUnit]**: the seam to the model service that turns state into a message
//! - **[StepExecutor]**: bounded-retry execution of a single step
//! - **[MemoryStepExecutor]**: the same step wrapped with transparent session memory
//! - **[ChatStore]**: append-only, deduplicated session log ([InMemoryChatStore], [SqliteChatStore])
//! - **[ToolRegistry]**: explicit catalog of [Tool] constructors
//!
//! ## Quick Start
//!
//! ```rust
//! use stride::{ChatStore, InMemoryChatStore, Message, SessionId, Tool, ToolRegistry};
//!
//! let registry = ToolRegistry::builtin();
//! let greet = registry.resolve(&["greet"]).remove(0);
//! let result = greet.call(r#"{"name":"Ana"}"#.to_string());
//! assert_eq!(result.output(), "Hola, Ana!");
//!
//! let store = InMemoryChatStore::new();
//! let session = SessionId::new("demo").unwrap();
//! store.append(&session, &Message::user("hi")).unwrap();
//! store.append(&session, &Message::assistant("Hola, Ana!")).unwrap();
//! assert_eq!(store.load(&session).unwrap().len(), 2);
//! ```

// Module aliases for namespaced access
pub use stride_core as core;
pub use stride_memory as memory;
pub use stride_runtime as runtime;
pub use stride_tools as tools;

#[cfg(feature = "testing")]
pub use stride_testing as testing;

// Messages and state
pub use stride_core::{
    AgentOutcome, AgentState, ContentBlock, Message, MessageContent, Role,
};

// Identifiers and configuration
pub use stride_core::{InvalidSessionId, InvalidToolName, SessionId, StepConfig, ToolName};

// Decision seam and errors
pub use stride_core::{DecisionUnit, StepError, StoreError, TransportError};

// Tools
pub use stride_core::{ExecutionResult, Tool, ToolCall};
pub use stride_tools::{GreetTool, ToolConstructor, ToolRegistry};

// Session memory
pub use stride_memory::{ChatStore, InMemoryChatStore, SqliteChatStore};

// Step execution
pub use stride_runtime::{
    CORRECTIVE_PROMPT, FALLBACK_REPLY, MemoryStepExecutor, StepExecutor, StepOutcome,
};
