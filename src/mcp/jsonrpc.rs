//! JSON-RPC 2.0 envelopes used by both transports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: RequestId,
    pub result: Value,
}

/// Error response. `id` is `null` when the request could not be read far
/// enough to recover it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    pub id: Option<RequestId>,
    pub error: JsonRpcError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request ID, a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

/// A message without `id`; never answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl JsonRpcRequest {
    pub fn new(id: RequestId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcResponse {
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::with_id(Some(id), code, message)
    }

    pub fn with_id(id: Option<RequestId>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::with_id(None, error_codes::PARSE_ERROR, message)
    }
}

/// What the handler writes back for one request.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    pub fn to_json(&self) -> String {
        let encoded = match self {
            JsonRpcOutput::Success(response) => serde_json::to_string(response),
            JsonRpcOutput::Error(response) => serde_json::to_string(response),
        };
        encoded.unwrap_or_else(|e| {
            format!(
                r#"{{"jsonrpc":"2.0","id":null,"error":{{"code":{},"message":"{}"}}}}"#,
                error_codes::INTERNAL_ERROR,
                e.to_string().replace('"', "'")
            )
        })
    }

    pub fn error(&self) -> Option<&JsonRpcError> {
        match self {
            JsonRpcOutput::Success(_) => None,
            JsonRpcOutput::Error(response) => Some(&response.error),
        }
    }

    pub fn result(&self) -> Option<&Value> {
        match self {
            JsonRpcOutput::Success(response) => Some(&response.result),
            JsonRpcOutput::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_id_forms() {
        let numeric: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 7, "method": "ping"})).unwrap();
        assert_eq!(numeric.id, RequestId::Number(7));
        assert!(numeric.params.is_none());

        let text: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": "a-1", "method": "ping"}))
                .unwrap();
        assert_eq!(text.id, RequestId::String("a-1".to_string()));
    }

    #[test]
    fn test_request_without_id_is_not_a_request() {
        let raw = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(serde_json::from_value::<JsonRpcRequest>(raw.clone()).is_err());
        assert!(serde_json::from_value::<JsonRpcNotification>(raw).is_ok());
    }

    #[test]
    fn test_parse_error_has_null_id() {
        let output = JsonRpcOutput::Error(JsonRpcErrorResponse::parse_error("Parse error"));
        let value: Value = serde_json::from_str(&output.to_json()).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert_eq!(value["error"]["code"], -32700);
        assert!(value["error"].get("data").is_none());
    }

    #[test]
    fn test_success_serialization() {
        let output = JsonRpcOutput::Success(JsonRpcResponse::success(
            RequestId::Number(1),
            json!({}),
        ));
        assert_eq!(output.to_json(), r#"{"jsonrpc":"2.0","id":1,"result":{}}"#);
        assert!(output.error().is_none());
    }
}
