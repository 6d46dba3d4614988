//! Memory-backed step execution.

use std::num::NonZeroU32;
use std::sync::Arc;

use stride_core::decision::DecisionUnit;
use stride_core::error::StepError;
use stride_core::message::Message;
use stride_core::session::{SessionId, StepConfig};
use stride_core::state::AgentState;
use stride_memory::ChatStore;

use crate::executor::{StepExecutor, StepOutcome};

/// A [`StepExecutor`] wrapped with transparent session memory.
///
/// Before delegating, the wrapper loads the session's durable history into
/// the state; after delegating, it appends the turn's user input and the
/// outgoing message. History is loaded exactly once per call, so retries
/// inside the wrapped executor all see the same snapshot.
///
/// Persistence is best effort: a store failure on either side of the call
/// is logged and swallowed, and the step result is returned regardless. The
/// only error this wrapper itself produces is a missing session id.
pub struct MemoryStepExecutor<D> {
    inner: StepExecutor<D>,
    store: Arc<dyn ChatStore>,
}

impl<D: DecisionUnit> MemoryStepExecutor<D> {
    /// Bind a decision unit and a chat store with the default retry budget.
    pub fn new(unit: D, store: Arc<dyn ChatStore>) -> Self {
        Self {
            inner: StepExecutor::new(unit),
            store,
        }
    }

    /// Override the wrapped executor's total invocation budget.
    pub fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.inner = self.inner.with_max_attempts(max_attempts);
        self
    }

    /// Execute one step against the session named in `config`.
    ///
    /// Fails only when `config` carries no session id. The loaded history
    /// replaces `state.history`; when loading fails the step proceeds with
    /// an empty history rather than aborting the turn.
    pub async fn execute(
        &self,
        state: &mut AgentState,
        config: &StepConfig,
    ) -> Result<StepOutcome, StepError> {
        let session = config
            .session_id
            .as_ref()
            .ok_or(StepError::MissingSessionId)?;

        state.history = match self.store.load(session) {
            Ok(history) => history,
            Err(err) => {
                tracing::warn!(
                    session = %session,
                    error = %err,
                    "failed to load session history, starting from empty"
                );
                Vec::new()
            }
        };

        let outcome = self.inner.execute(state, config).await;

        // A fallback turn never reached the decision unit's output; the
        // exchange did not happen, so nothing is written.
        if !outcome.is_fallback() {
            if !state.input.is_empty() {
                self.persist(session, &Message::user(state.input.clone()));
            }
            self.persist(session, &outcome.message);
        }

        Ok(outcome)
    }

    fn persist(&self, session: &SessionId, message: &Message) {
        if let Err(err) = self.store.append(session, message) {
            tracing::warn!(
                session = %session,
                error = %err,
                role = %message.role,
                "failed to persist message"
            );
        }
    }
}
