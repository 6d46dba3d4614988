//! Bounded-retry step execution.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use stride_core::decision::DecisionUnit;
use stride_core::error::TransportError;
use stride_core::message::Message;
use stride_core::session::StepConfig;
use stride_core::state::AgentState;

/// Synthetic reply returned when the retry budget is exhausted.
pub const FALLBACK_REPLY: &str = "I cannot resolve the task. Retry.";

/// Corrective instruction injected when the decision unit returns an
/// empty result with no tool request.
pub const CORRECTIVE_PROMPT: &str = "Please provide a valid output.";

/// Default retry budget: two total invocation attempts.
const DEFAULT_MAX_ATTEMPTS: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);

/// Result envelope of one step, keyed by the fixed `messages` field.
///
/// The contract is always exactly one message, even when the underlying
/// call chain failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    #[serde(rename = "messages")]
    pub message: Message,

    /// Whether the message is the synthetic fallback reply rather than a
    /// delivered response. Fallback turns are not part of the conversation
    /// and are excluded from durable history.
    #[serde(skip)]
    is_fallback: bool,
}

impl StepOutcome {
    pub fn new(message: Message) -> Self {
        Self {
            message,
            is_fallback: false,
        }
    }

    fn fallback() -> Self {
        Self {
            message: Message::assistant(FALLBACK_REPLY),
            is_fallback: true,
        }
    }

    /// Whether this outcome carries the synthetic fallback reply.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}

/// Outcome of one successful invocation attempt.
///
/// Attempts are pure: the validity verdict travels with the message instead
/// of being applied to shared state mid-loop, so the corrective entry is
/// appended exactly once by the outer call.
struct Attempt {
    message: Message,
    needs_correction: bool,
}

/// Executes a bound decision unit with a bounded retry budget.
///
/// Only transport-level failures trigger a retry; attempts are immediate
/// and strictly sequential, re-using the same inputs. A malformed but
/// delivered response is accepted with a corrective side effect instead.
/// Exhausting the budget produces the fixed fallback reply; failures are
/// never re-raised to the caller.
pub struct StepExecutor<D> {
    unit: D,
    max_attempts: NonZeroU32,
}

impl<D: DecisionUnit> StepExecutor<D> {
    /// Bind a decision unit with the default budget of two attempts.
    pub fn new(unit: D) -> Self {
        Self {
            unit,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the total invocation budget.
    pub fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The configured total invocation budget.
    pub fn max_attempts(&self) -> NonZeroU32 {
        self.max_attempts
    }

    /// Execute one step: invoke the decision unit, retrying transport
    /// failures up to the budget, and normalize the result.
    ///
    /// A well-formed response is returned unchanged. An empty response with
    /// no tool request appends one corrective instruction to the state's
    /// message sequence and is then accepted as complete.
    pub async fn execute(&self, state: &mut AgentState, config: &StepConfig) -> StepOutcome {
        let attempt = match self.invoke_with_retry(state, config).await {
            Ok(attempt) => attempt,
            Err(_) => return StepOutcome::fallback(),
        };

        if attempt.needs_correction {
            state.messages.push(Message::user(CORRECTIVE_PROMPT));
        }

        StepOutcome::new(attempt.message)
    }

    async fn invoke_with_retry(
        &self,
        state: &AgentState,
        config: &StepConfig,
    ) -> Result<Attempt, TransportError> {
        let mut attempt = 1;
        loop {
            match self.unit.complete(state, config).await {
                Ok(message) => {
                    let needs_correction = !message.has_tool_calls() && !message.has_text();
                    return Ok(Attempt {
                        message,
                        needs_correction,
                    });
                }
                Err(err) if attempt < self.max_attempts.get() => {
                    tracing::warn!(error = %err, attempt, "decision unit call failed, retrying");
                    attempt += 1;
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        attempts = attempt,
                        "retry budget exhausted, falling back"
                    );
                    return Err(err);
                }
            }
        }
    }
}
