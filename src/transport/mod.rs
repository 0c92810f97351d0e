//! Transports that carry MCP messages to `McpHandler`.

mod auth;
pub mod http;
pub mod stdio;

pub use http::{build_router, AppState};
pub use stdio::StdioTransport;
