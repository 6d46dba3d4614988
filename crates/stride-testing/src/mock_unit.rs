//! Scripted decision unit for executor tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use stride_core::decision::DecisionUnit;
use stride_core::error::TransportError;
use stride_core::message::Message;
use stride_core::session::StepConfig;
use stride_core::state::AgentState;

/// A decision unit that plays back a script of results.
///
/// Each `complete` call consumes the next scripted entry; once the script
/// is exhausted every further call fails with a transport error, so an
/// empty script models a unit that always fails.
pub struct MockDecisionUnit {
    script: Mutex<VecDeque<Result<Message, TransportError>>>,
    calls: AtomicUsize,
}

impl Default for MockDecisionUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDecisionUnit {
    /// Create a unit with an empty script (always fails).
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a successful reply.
    pub fn then_reply(self, message: Message) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(message));
        self
    }

    /// Script a transport failure.
    pub fn then_fail(self, reason: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(TransportError::CallFailed {
                reason: reason.into(),
            }));
        self
    }

    /// Number of times `complete` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DecisionUnit for MockDecisionUnit {
    async fn complete(
        &self,
        _state: &AgentState,
        _config: &StepConfig,
    ) -> Result<Message, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::CallFailed {
                    reason: "mock script exhausted".to_string(),
                })
            })
    }
}
