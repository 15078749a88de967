// Echo tool

use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use serde::Deserialize;

/// Tool that echoes a message back, prefixed with `Echo: `.
pub struct EchoTool;

impl EchoTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
struct EchoArgs {
    #[serde(default)]
    message: String,
}

#[async_trait::async_trait]
impl Tool for EchoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "echo".to_string(),
            description: "Echo back a message".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "message": json_schema_string("Message to echo")
                }),
                vec!["message"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        // Absent or malformed arguments degrade to an empty message.
        let args: EchoArgs = serde_json::from_value(arguments).unwrap_or_default();

        Ok(CallToolResult {
            content: vec![ToolContent::text(format!("Echo: {}", args.message))],
            is_error: None,
        })
    }
}
