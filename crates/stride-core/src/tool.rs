//! The tool capability surface exposed to decision units.
//!
//! A tool is a named unit of external functionality with a declared input
//! schema and an invocation handler. Tools are registered once at process
//! start and looked up by name; both a synchronous and an asynchronous
//! invocation form are supported with identical semantics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry key for a tool.
///
/// Decision units refer to tools by name, so the name is validated once at
/// construction and the registry indexes on the validated form. Surrounding
/// whitespace is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolName(String);

/// Rejected tool names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidToolName {
    #[error("tool name must not be empty")]
    Empty,
    #[error("tool name is {0} characters, limit is 64")]
    TooLong(usize),
    #[error("tool name '{0}' has characters outside alphanumerics, '_' and '-'")]
    InvalidChars(String),
}

impl ToolName {
    pub const MAX_LENGTH: usize = 64;

    /// Validate and wrap a tool name.
    ///
    /// Accepts 1 to 64 alphanumeric characters, underscores and hyphens
    /// after trimming whitespace.
    pub fn new(name: &str) -> Result<Self, InvalidToolName> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidToolName::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(InvalidToolName::TooLong(name.len()));
        }
        let allowed = |c: char| c.is_alphanumeric() || c == '_' || c == '-';
        if name.chars().all(allowed) {
            Ok(ToolName(name.to_owned()))
        } else {
            Err(InvalidToolName::InvalidChars(name.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets the registry index HashMap<ToolName, _> and still look up by &str.
impl std::borrow::Borrow<str> for ToolName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        name.0
    }
}

impl TryFrom<String> for ToolName {
    type Error = InvalidToolName;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        ToolName::new(&name)
    }
}

/// A request to invoke a specific tool with input data.
///
/// `ToolCall` represents a decision unit's intent to use an external
/// capability. The registry routes the call to the implementation registered
/// under `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// The validated name of the tool to invoke.
    pub name: ToolName,

    /// The input data to pass to the tool.
    ///
    /// Tools are responsible for parsing and validating this input against
    /// their declared schema.
    pub input: String,
}

impl ToolCall {
    /// Create a new ToolCall, validating the tool name.
    pub fn new(name: &str, input: &str) -> Result<Self, InvalidToolName> {
        Ok(Self {
            name: ToolName::new(name)?,
            input: input.to_string(),
        })
    }

    /// Create a new ToolCall from a validated ToolName and input string.
    pub fn from_validated(name: ToolName, input: String) -> Self {
        Self { name, input }
    }
}

/// The result of a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionResult {
    /// Tool executed successfully with the given output.
    Success { output: String },

    /// Tool execution failed with an error description.
    Failure { error: String },
}

impl ExecutionResult {
    /// Create a successful execution result.
    pub fn success(output: impl Into<String>) -> Self {
        ExecutionResult::Success {
            output: output.into(),
        }
    }

    /// Create a failed execution result.
    pub fn failure(error: impl Into<String>) -> Self {
        ExecutionResult::Failure {
            error: error.into(),
        }
    }

    /// Whether this result represents a successful invocation.
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    /// The textual payload of the result, success or failure.
    pub fn output(&self) -> &str {
        match self {
            ExecutionResult::Success { output } => output,
            ExecutionResult::Failure { error } => error,
        }
    }
}

/// Trait defining a callable capability with a fixed signature.
///
/// Every tool declares a unique name, a human-readable description, and a
/// JSON schema for its input. The registry instantiates one implementation
/// per tool at startup; instances are immutable thereafter and dispatched
/// by name.
///
/// `call_async` defaults to delegating to the synchronous `call`, so
/// implementations provide whichever form is natural and callers may use
/// either interchangeably.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the tool is registered and dispatched under.
    fn name(&self) -> &str;

    /// Human-readable description surfaced to the decision unit.
    fn description(&self) -> &str;

    /// JSON schema describing the expected input payload.
    fn schema(&self) -> serde_json::Value;

    /// Invoke the tool synchronously with raw input.
    fn call(&self, input: String) -> ExecutionResult;

    /// Invoke the tool asynchronously. Identical semantics to [`Tool::call`].
    async fn call_async(&self, input: String) -> ExecutionResult {
        self.call(input)
    }
}
