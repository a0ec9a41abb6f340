// SPDX-License-Identifier: MIT

use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Trait for tools that can be called by a function-calling host.
///
/// # Optimization Notes
/// - `name()` and `description()` return `&str` to avoid allocation on every call
/// - `schema()` returns `&Value` to avoid cloning the schema on every access
/// - Implementations keep the schema in a `Lazy` static
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool name (must be unique within a registry)
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's input parameters
    fn schema(&self) -> &Value;

    /// Execute the tool with the given input and return the decoded response
    async fn execute(&self, input: Value) -> Result<Value, ToolError>;

    /// Host-facing entry point: never fails, errors become `{ "error": "..." }`
    async fn invoke(&self, input: Value) -> Value {
        into_host_value(self.execute(input).await)
    }

    /// Static descriptor for registration with the host
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.schema().clone(),
        }
    }
}

/// Name, purpose and parameter schema of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    /// `{ type: "function", function: { name, description, parameters } }`
    pub fn to_function_descriptor(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }

    /// Names listed under `parameters.required`
    pub fn required(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Flatten a tool result into the shape hosts expect.
pub fn into_host_value(result: Result<Value, ToolError>) -> Value {
    match result {
        Ok(value) => value,
        Err(e) => json!({ "error": e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static ECHO_SCHEMA: Lazy<Value> = Lazy::new(|| {
        json!({
            "type": "object",
            "properties": {
                "text": {"type": "string", "description": "Text to echo"}
            },
            "required": ["text"]
        })
    });

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes its input"
        }

        fn schema(&self) -> &Value {
            &ECHO_SCHEMA
        }

        async fn execute(&self, input: Value) -> Result<Value, ToolError> {
            if input.get("fail").is_some() {
                return Err(ToolError::tool_not_found("missing"));
            }
            Ok(input)
        }
    }

    #[tokio::test]
    async fn test_invoke_passes_success_through() {
        let out = EchoTool.invoke(json!([{"text": "hi"}])).await;
        assert_eq!(out, json!([{"text": "hi"}]));
    }

    #[tokio::test]
    async fn test_invoke_flattens_error() {
        let out = EchoTool.invoke(json!({"fail": true})).await;
        assert_eq!(out, json!({"error": "Tool 'missing' not found"}));
    }

    #[test]
    fn test_function_descriptor_shape() {
        let descriptor = EchoTool.definition().to_function_descriptor();
        assert_eq!(descriptor["type"], "function");
        assert_eq!(descriptor["function"]["name"], "echo");
        assert_eq!(descriptor["function"]["description"], "Echoes its input");
        assert_eq!(descriptor["function"]["parameters"], *ECHO_SCHEMA);
    }

    #[test]
    fn test_required_names() {
        assert_eq!(EchoTool.definition().required(), vec!["text"]);
    }
}
