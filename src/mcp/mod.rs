//! Model Context Protocol surface: JSON-RPC envelopes, MCP payloads, the
//! method handler and the resource table.

pub mod handler;
pub mod jsonrpc;
pub mod resources;
pub mod types;

pub use handler::{McpHandler, SERVER_NAME};
pub use jsonrpc::{
    error_codes, JsonRpcError, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcOutput,
    JsonRpcRequest, JsonRpcResponse, RequestId,
};
