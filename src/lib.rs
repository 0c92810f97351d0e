pub mod adapters;
pub mod analytics;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod helpers;
pub mod mcp;
pub mod search;
pub mod transport;
pub mod utils;

pub use crate::adapters::MerakiClient;
pub use crate::config::{ServerConfig, Transport};
pub use crate::core::{Tool, ToolOutcome, ToolRegistry};
pub use crate::mcp::McpHandler;
pub use crate::utils::error::{MerakiError, Result};
