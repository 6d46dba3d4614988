//! Built-in greeting tool.

use async_trait::async_trait;
use serde::Deserialize;

use stride_core::tool::{ExecutionResult, Tool};

#[derive(Debug, Deserialize)]
struct GreetInput {
    /// Person's name.
    name: String,
}

/// Greets the user by name.
///
/// Input is JSON conforming to the declared schema; malformed input is a
/// failure result, never a panic.
pub struct GreetTool;

#[async_trait]
impl Tool for GreetTool {
    fn name(&self) -> &str {
        "greet"
    }

    fn description(&self) -> &str {
        "Greet the user when they provide their name"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Person's name"
                }
            },
            "required": ["name"]
        })
    }

    fn call(&self, input: String) -> ExecutionResult {
        match serde_json::from_str::<GreetInput>(&input) {
            Ok(args) => ExecutionResult::success(format!("Hola, {}!", args.name)),
            Err(err) => ExecutionResult::failure(format!("invalid greet input: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        let result = GreetTool.call("{\"name\":\"Ana\"}".to_string());
        assert!(result.is_success());
        assert_eq!(result.output(), "Hola, Ana!");
    }

    #[test]
    fn malformed_input_fails_without_panicking() {
        let result = GreetTool.call("not json".to_string());
        assert!(!result.is_success());
        assert!(result.output().contains("invalid greet input"));

        let missing_field = GreetTool.call("{}".to_string());
        assert!(!missing_field.is_success());
    }

    #[tokio::test]
    async fn async_form_matches_sync_form() {
        let sync_result = GreetTool.call("{\"name\":\"Ana\"}".to_string());
        let async_result = GreetTool.call_async("{\"name\":\"Ana\"}".to_string()).await;
        assert_eq!(sync_result, async_result);
    }

    #[test]
    fn schema_requires_name() {
        let schema = GreetTool.schema();
        assert_eq!(schema["required"][0], "name");
    }
}
