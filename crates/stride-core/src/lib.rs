//! # Stride Core
//!
//! Shared vocabulary for the Stride step engine: the message and state
//! types exchanged with a decision unit, the tool capability trait, and
//! the error taxonomy used across the workspace.
//!
//! ## Core Components
//!
//! - **[Message]**: One conversational turn (role, content, tool requests)
//! - **[AgentState]**: Accumulated state owned by one in-flight step
//! - **[Tool]**: Trait for named, independently invocable capabilities
//! - **[DecisionUnit]**: The seam to the remote model service
//! - **[SessionId]**: Validated identifier scoping a durable conversation

pub mod decision;
pub mod error;
pub mod message;
pub mod session;
pub mod state;
pub mod tool;

pub use decision::DecisionUnit;
pub use error::{StepError, StoreError, TransportError};
pub use message::{ContentBlock, Message, MessageContent, Role};
pub use session::{InvalidSessionId, SessionId, StepConfig};
pub use state::{AgentOutcome, AgentState};
pub use tool::{ExecutionResult, InvalidToolName, Tool, ToolCall, ToolName};
