//! Scripted tool double with call recording.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use stride_core::tool::{ExecutionResult, Tool};

/// A tool double that answers from a script and records every invocation.
///
/// Responses are keyed by exact input; unmatched inputs fall back to the
/// configured default, or to echoing the input when no default is set. The
/// recorded call history is shared across clones, so a test can hold one
/// handle while the registry dispatches through another.
#[derive(Debug, Clone)]
pub struct MockTool {
    name: String,
    responses: HashMap<String, ExecutionResult>,
    default_response: Option<ExecutionResult>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl MockTool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: HashMap::new(),
            default_response: None,
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a success result for one exact input.
    pub fn with_response(mut self, input: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .insert(input.into(), ExecutionResult::success(response.into()));
        self
    }

    /// Script a failure result for one exact input.
    pub fn with_failure(mut self, input: impl Into<String>, error: impl Into<String>) -> Self {
        self.responses
            .insert(input.into(), ExecutionResult::failure(error.into()));
        self
    }

    /// Script the success result returned for any unmatched input.
    pub fn with_default_response(mut self, response: impl Into<String>) -> Self {
        self.default_response = Some(ExecutionResult::success(response.into()));
        self
    }

    /// How many times the tool has been invoked.
    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }

    /// Every input the tool has been invoked with, in call order.
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().unwrap().clone()
    }

    /// Whether some invocation used exactly this input.
    pub fn was_called_with(&self, input: &str) -> bool {
        self.call_history
            .lock()
            .unwrap()
            .iter()
            .any(|recorded| recorded == input)
    }
}

#[async_trait]
impl Tool for MockTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Scripted tool double"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "string" })
    }

    fn call(&self, input: String) -> ExecutionResult {
        self.call_history.lock().unwrap().push(input.clone());

        self.responses
            .get(&input)
            .or(self.default_response.as_ref())
            .cloned()
            .unwrap_or_else(|| ExecutionResult::success(format!("echo: {input}")))
    }
}
