use crate::core::registry::ToolRegistry;
use crate::mcp::jsonrpc::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcOutput, JsonRpcRequest,
    JsonRpcResponse, RequestId,
};
use crate::mcp::resources;
use crate::mcp::types::{
    InitializeResult, McpToolDefinition, ResourceTemplatesListResult, ResourcesCapability,
    ResourcesListResult, ResourcesReadParams, ResourcesReadResult, ServerCapabilities, ServerInfo,
    ToolContent, ToolsCallParams, ToolsCallResult, ToolsCapability, ToolsListResult,
    PROTOCOL_VERSION,
};
use crate::utils::error::MerakiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub const SERVER_NAME: &str = "meraki-mcp";

/// Routes MCP methods to the tool registry and the resource table. Shared by
/// the stdio and HTTP transports.
#[derive(Clone)]
pub struct McpHandler {
    registry: Arc<ToolRegistry>,
}

impl McpHandler {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handles one raw JSON-RPC message. Returns `None` for notifications.
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcOutput> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.handle_value(value).await,
            Err(e) => {
                tracing::warn!("❌ Unparsable message: {}", e);
                Some(JsonRpcOutput::Error(JsonRpcErrorResponse::parse_error(
                    format!("Parse error: {}", e),
                )))
            }
        }
    }

    pub async fn handle_value(&self, value: Value) -> Option<JsonRpcOutput> {
        if !value.is_object() {
            return Some(invalid_request(None, "expected a JSON-RPC object"));
        }

        let id = value.get("id").filter(|id| !id.is_null()).cloned();
        let Some(id) = id else {
            match serde_json::from_value::<JsonRpcNotification>(value) {
                Ok(notification) => self.handle_notification(&notification),
                Err(e) => tracing::debug!("⚠️ Dropping malformed notification: {}", e),
            }
            return None;
        };

        let request_id = serde_json::from_value::<RequestId>(id).ok();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) if request.jsonrpc == "2.0" => Some(self.dispatch(&request).await),
            Ok(request) => Some(invalid_request(
                Some(request.id),
                format!("unsupported jsonrpc version '{}'", request.jsonrpc),
            )),
            Err(e) => Some(invalid_request(request_id, format!("Invalid request: {}", e))),
        }
    }

    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        tracing::debug!("📡 {} ({:?})", request.method, id);

        match request.method.as_str() {
            "initialize" => respond(id, &self.initialize()),
            "ping" => respond(id, &serde_json::json!({})),
            "tools/list" => respond(id, &self.tools_list()),
            "tools/call" => self.tools_call(id, &request.params).await,
            method if method.starts_with("resources/") && !self.registry.resources_enabled() => {
                JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Resources are disabled: {}", method),
                ))
            }
            "resources/list" => respond(
                id,
                &ResourcesListResult {
                    resources: resources::list(),
                },
            ),
            "resources/templates/list" => respond(
                id,
                &ResourceTemplatesListResult {
                    resource_templates: resources::templates(),
                },
            ),
            "resources/read" => self.resources_read(id, &request.params).await,
            other => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            )),
        }
    }

    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            "notifications/initialized" => tracing::info!("✅ Client initialized"),
            other => tracing::debug!("📡 Notification {}", other),
        }
    }

    fn initialize(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability::default()),
                resources: self
                    .registry
                    .resources_enabled()
                    .then(ResourcesCapability::default),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(format!(
                "Cisco Meraki Dashboard tools ({} loaded). Start with list_tool_categories \
                 when available, or get_organizations.",
                self.registry.len()
            )),
        }
    }

    fn tools_list(&self) -> ToolsListResult {
        let tools = self
            .registry
            .definitions()
            .into_iter()
            .map(|d| McpToolDefinition {
                name: d.name.clone(),
                description: Some(d.description.clone()),
                input_schema: d.input_schema.clone(),
            })
            .collect();
        ToolsListResult {
            tools,
            next_cursor: None,
        }
    }

    async fn tools_call(&self, id: RequestId, params: &Option<Value>) -> JsonRpcOutput {
        let params: ToolsCallParams = match parse_params(params, "tools/call") {
            Ok(p) => p,
            Err(message) => return invalid_params(id, message),
        };

        match self.registry.call(&params.name, &params.arguments).await {
            Ok(outcome) => respond(
                id,
                &ToolsCallResult {
                    content: vec![ToolContent::Text { text: outcome.text }],
                    is_error: outcome.is_error,
                },
            ),
            Err(e @ MerakiError::ToolNotFound(_)) => invalid_params(id, e.to_string()),
            Err(e) => internal_error(id, e.to_string()),
        }
    }

    async fn resources_read(&self, id: RequestId, params: &Option<Value>) -> JsonRpcOutput {
        let params: ResourcesReadParams = match parse_params(params, "resources/read") {
            Ok(p) => p,
            Err(message) => return invalid_params(id, message),
        };

        match resources::read(self.registry.api().as_ref(), &params.uri).await {
            Ok(contents) => respond(
                id,
                &ResourcesReadResult {
                    contents: vec![contents],
                },
            ),
            Err(e @ MerakiError::ResourceNotFound(_)) => invalid_params(id, e.to_string()),
            Err(e) => {
                tracing::warn!("❌ Reading {} failed: {}", params.uri, e);
                internal_error(id, e.user_friendly_message())
            }
        }
    }
}

fn parse_params<T: DeserializeOwned>(
    params: &Option<Value>,
    method: &str,
) -> std::result::Result<T, String> {
    let params = params
        .as_ref()
        .ok_or_else(|| format!("{} requires params", method))?;
    serde_json::from_value(params.clone()).map_err(|e| format!("invalid {} params: {}", method, e))
}

fn respond<T: Serialize>(id: RequestId, result: &T) -> JsonRpcOutput {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcOutput::Success(JsonRpcResponse::success(id, value)),
        Err(e) => internal_error(id, e.to_string()),
    }
}

fn invalid_request(id: Option<RequestId>, message: impl Into<String>) -> JsonRpcOutput {
    JsonRpcOutput::Error(JsonRpcErrorResponse::with_id(
        id,
        error_codes::INVALID_REQUEST,
        message,
    ))
}

fn invalid_params(id: RequestId, message: impl Into<String>) -> JsonRpcOutput {
    JsonRpcOutput::Error(JsonRpcErrorResponse::error(
        id,
        error_codes::INVALID_PARAMS,
        message,
    ))
}

fn internal_error(id: RequestId, message: impl Into<String>) -> JsonRpcOutput {
    JsonRpcOutput::Error(JsonRpcErrorResponse::error(
        id,
        error_codes::INTERNAL_ERROR,
        message,
    ))
}
