// Host facts tool

use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
use crate::tools::{json_schema_object, Tool};
use anyhow::Result;

/// Tool reporting static facts about the host: OS family, CPU architecture,
/// server version, and logical CPU count. Takes no arguments.
pub struct SystemInfoTool;

impl SystemInfoTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInfoTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Tool for SystemInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "system_info".to_string(),
            description: "Get system information".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let text = format!(
            "OS: {}\nArch: {}\nServer: {}\nCPUs: {}",
            std::env::consts::OS,
            std::env::consts::ARCH,
            env!("CARGO_PKG_VERSION"),
            num_cpus::get(),
        );

        Ok(CallToolResult {
            content: vec![ToolContent::text(text)],
            is_error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_host_facts() {
        let tool = SystemInfoTool::new();
        let result = tool.execute(serde_json::Value::Null).await.unwrap();

        assert_eq!(result.content.len(), 1);
        let ToolContent::Text { text } = &result.content[0];
        assert!(text.contains("OS: "));
        assert!(text.contains("Arch: "));
        assert!(text.contains("CPUs: "));
    }

    #[test]
    fn takes_no_required_arguments() {
        let schema = SystemInfoTool::new().schema();
        assert_eq!(schema.name, "system_info");
        assert_eq!(schema.input_schema["required"], serde_json::json!([]));
    }
}
