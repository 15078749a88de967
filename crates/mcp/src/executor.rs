// Tool execution against the registry

use crate::protocol::{CallToolResult, ToolContent};
use crate::tools::ToolRegistry;
use serde::Serialize;
use std::sync::Arc;

/// Application-level failure payload. Rides inside a *successful* envelope as
/// `{"error": "..."}`; protocol-level faults never take this shape.
#[derive(Debug, Clone, Serialize)]
pub struct ToolFault {
    pub error: String,
}

impl ToolFault {
    pub fn unknown_tool() -> Self {
        Self {
            error: "Unknown tool".to_string(),
        }
    }
}

/// Outcome of one tool invocation, serialized verbatim as the response
/// envelope's result field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    Content(CallToolResult),
    Fault(ToolFault),
}

/// Runs tools looked up from the shared registry. Stateless across calls.
pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
}

impl ToolExecutor {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Execute a named tool. An unregistered name is an application fault,
    /// not a protocol error; a tool body failure is folded into an error
    /// content block so the envelope still succeeds.
    pub async fn execute(&self, name: &str, arguments: serde_json::Value) -> ToolOutcome {
        let Some(tool) = self.registry.get(name) else {
            tracing::warn!("tools/call for unregistered tool: {}", name);
            return ToolOutcome::Fault(ToolFault::unknown_tool());
        };

        match tool.execute(arguments).await {
            Ok(result) => ToolOutcome::Content(result),
            Err(e) => {
                tracing::error!("tool {} failed: {:#}", name, e);
                ToolOutcome::Content(CallToolResult {
                    content: vec![ToolContent::error(e.to_string())],
                    is_error: Some(true),
                })
            }
        }
    }
}
