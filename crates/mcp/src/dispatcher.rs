// JSON-RPC method dispatch

use crate::executor::ToolExecutor;
use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability, PROTOCOL_VERSION,
    SERVER_NAME,
};
use crate::tools::ToolRegistry;
use serde_json::Value;
use std::sync::Arc;

/// Protocol-level faults. Tool-level failures never appear here; they ride
/// inside a successful envelope as result data.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Parse error")]
    Parse(#[source] serde_json::Error),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),
}

impl DispatchError {
    pub fn code(&self) -> i32 {
        match self {
            Self::Parse(_) => -32700,
            Self::MethodNotFound(_) => -32601,
            Self::InvalidParams(_) => -32602,
        }
    }

    fn to_error_object(&self) -> JsonRpcError {
        match self {
            Self::Parse(_) => JsonRpcError::parse_error(),
            Self::MethodNotFound(method) => JsonRpcError::method_not_found(method),
            Self::InvalidParams(message) => JsonRpcError::invalid_params(message.clone()),
        }
    }
}

/// A request decoded into its method-specific shape. Params are decoded here,
/// once, so handlers receive typed values instead of raw JSON.
#[derive(Debug)]
enum McpMethod {
    Initialize,
    ToolsList,
    ToolsCall(CallToolParams),
}

impl McpMethod {
    fn from_request(req: &JsonRpcRequest) -> Result<Self, DispatchError> {
        match req.method.as_str() {
            "initialize" => Ok(Self::Initialize),
            "tools/list" => Ok(Self::ToolsList),
            "tools/call" => {
                let params = req.params.clone().ok_or_else(|| {
                    DispatchError::InvalidParams("missing params for tools/call".to_string())
                })?;
                let params: CallToolParams = serde_json::from_value(params)
                    .map_err(|e| DispatchError::InvalidParams(e.to_string()))?;
                Ok(Self::ToolsCall(params))
            }
            other => Err(DispatchError::MethodNotFound(other.to_string())),
        }
    }
}

/// Routes decoded envelopes to their handlers. Holds no per-request state;
/// every request is independent.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    executor: ToolExecutor,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        let executor = ToolExecutor::new(registry.clone());
        Self { registry, executor }
    }

    /// Decode raw request bytes and dispatch. Transport-level parse failures
    /// short-circuit to a -32700 error with a null id, bypassing method
    /// routing entirely.
    pub async fn dispatch_bytes(&self, raw: &[u8]) -> JsonRpcResponse {
        let req: JsonRpcRequest = match serde_json::from_slice(raw) {
            Ok(req) => req,
            Err(e) => {
                tracing::debug!("request body failed to parse: {}", e);
                let err = DispatchError::Parse(e);
                return JsonRpcResponse::error(Value::Null, err.to_error_object());
            }
        };
        self.dispatch(req).await
    }

    /// Dispatch one decoded request. The request id is echoed back unchanged;
    /// an absent id becomes an explicit null.
    pub async fn dispatch(&self, req: JsonRpcRequest) -> JsonRpcResponse {
        let id = req.id.clone().unwrap_or(Value::Null);

        match McpMethod::from_request(&req) {
            Ok(McpMethod::Initialize) => {
                JsonRpcResponse::success(id, self.initialize_result())
            }
            Ok(McpMethod::ToolsList) => {
                let result = ListToolsResult {
                    tools: self.registry.schemas(),
                };
                JsonRpcResponse::success(id, result)
            }
            Ok(McpMethod::ToolsCall(params)) => {
                tracing::debug!("tools/call: {}", params.name);
                let outcome = self.executor.execute(&params.name, params.arguments).await;
                JsonRpcResponse::success(id, outcome)
            }
            Err(e) => {
                tracing::debug!("rejected request: {}", e);
                JsonRpcResponse::error(id, e.to_error_object())
            }
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: true },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
