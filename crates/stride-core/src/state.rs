//! Agent state accumulated across one conversational step.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::tool::ToolCall;

/// Outcome of the last decision: either a further tool invocation request
/// or a final answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentOutcome {
    /// The decision unit wants a tool invoked before it can finish.
    Act(ToolCall),
    /// The decision unit produced a final textual answer.
    Finish(String),
}

/// State owned exclusively by one in-flight step.
///
/// The state is never shared across concurrent steps; the executor borrows
/// it mutably for the duration of a step, so retries within the step all
/// observe the same snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentState {
    /// The new input text for this turn.
    pub input: String,

    /// Prior messages loaded from the session log, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<Message>,

    /// Message sequence of the current turn, in exchange order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,

    /// Result of the most recent decision, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<AgentOutcome>,

    /// (action, observation) pairs accumulated within this turn.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intermediate_steps: Vec<(ToolCall, String)>,
}

impl AgentState {
    /// Start a fresh state for a new input.
    pub fn from_input(input: impl Into<String>) -> Self {
        let input = input.into();
        Self {
            messages: vec![Message::user(input.clone())],
            input,
            ..Self::default()
        }
    }

    /// Record a completed (action, observation) pair.
    pub fn push_step(&mut self, action: ToolCall, observation: impl Into<String>) {
        self.intermediate_steps.push((action, observation.into()));
    }
}
