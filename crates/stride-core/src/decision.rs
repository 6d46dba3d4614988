//! The seam to the decision unit (an opaque remote model service).

use async_trait::async_trait;

use crate::error::TransportError;
use crate::message::Message;
use crate::session::StepConfig;
use crate::state::AgentState;

/// A decision unit bound to a set of callable tools.
///
/// Implementations accept the accumulated state plus the configuration bag
/// and return exactly one message: either one or more tool-invocation
/// requests or a final answer. Transport-level failures surface as
/// [`TransportError`] and are the only retryable condition.
#[async_trait]
pub trait DecisionUnit: Send + Sync {
    /// Invoke the decision unit once with the current state.
    ///
    /// This is the sole suspension point of a step attempt; the executor
    /// awaits it before deciding whether to retry.
    async fn complete(
        &self,
        state: &AgentState,
        config: &StepConfig,
    ) -> Result<Message, TransportError>;
}

#[async_trait]
impl<D: DecisionUnit + ?Sized> DecisionUnit for &D {
    async fn complete(
        &self,
        state: &AgentState,
        config: &StepConfig,
    ) -> Result<Message, TransportError> {
        (**self).complete(state, config).await
    }
}

#[async_trait]
impl<D: DecisionUnit + ?Sized> DecisionUnit for std::sync::Arc<D> {
    async fn complete(
        &self,
        state: &AgentState,
        config: &StepConfig,
    ) -> Result<Message, TransportError> {
        (**self).complete(state, config).await
    }
}
