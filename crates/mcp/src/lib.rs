// MCP (Model Context Protocol) server core: JSON-RPC envelopes, method
// dispatch, and the tool registry/executor. Transport lives in beacon-server.

pub mod dispatcher;
pub mod executor;
pub mod protocol;
pub mod tools;

pub use dispatcher::Dispatcher;
