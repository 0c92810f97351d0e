mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use common::FakeDashboard;
use meraki_mcp::mcp::error_codes;
use meraki_mcp::transport::{build_router, AppState, StdioTransport};
use meraki_mcp::{analytics, McpHandler, ToolRegistry};
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt;

fn handler() -> McpHandler {
    let api = Arc::new(
        FakeDashboard::new().route("/networks/N_1", json!({"id": "N_1", "name": "HQ"})),
    );
    let mut registry = ToolRegistry::new(api);
    for tool in analytics::tools() {
        registry.register(tool).unwrap();
    }
    McpHandler::new(Arc::new(registry))
}

fn state(token: Option<&str>) -> AppState {
    AppState {
        handler: Arc::new(handler()),
        token: token.map(str::to_string),
    }
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = build_router(state(None))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["tools"], 6);
}

#[tokio::test]
async fn test_tools_call_over_http() {
    let request = json!({
        "jsonrpc": "2.0", "id": "call-1", "method": "tools/call",
        "params": {"name": "event_analysis_help", "arguments": {}}
    });
    let response = build_router(state(None))
        .oneshot(post("/mcp", &request.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = json_body(response).await;
    assert_eq!(body["id"], "call-1");
    assert_eq!(body["result"]["isError"], false);
}

#[tokio::test]
async fn test_bearer_token_enforced() {
    let ping = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}).to_string();
    let router = build_router(state(Some("s3cret")));

    let denied = router.clone().oneshot(post("/mcp", &ping)).await.unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

    let mut request = post("/mcp", &ping);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        "Bearer s3cret".parse().unwrap(),
    );
    let allowed = router.oneshot(request).await.unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
    assert_eq!(json_body(allowed).await["result"], json!({}));
}

#[tokio::test]
async fn test_notification_and_parse_error() {
    let router = build_router(state(None));

    let notification = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
    let response = router
        .clone()
        .oneshot(post("/mcp", &notification.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router.oneshot(post("/mcp", "{oops")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["error"]["code"], error_codes::PARSE_ERROR);
}

#[tokio::test]
async fn test_sse_endpoint_streams_events() {
    let ping = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}).to_string();
    let response = build_router(state(None))
        .oneshot(post("/mcp/sse", &ping))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/event-stream"));
}

#[tokio::test]
async fn test_stdio_session() {
    let input = [
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
               "params": {"protocolVersion": "2024-11-05", "capabilities": {},
                          "clientInfo": {"name": "test", "version": "1"}}})
        .to_string(),
        String::new(),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string(),
        "not json".to_string(),
        json!({"jsonrpc": "2.0", "id": 2, "method": "resources/read",
               "params": {"uri": "networks://N_1"}})
        .to_string(),
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/list"}).to_string(),
    ]
    .join("\n");

    let handler = handler();
    let mut transport = StdioTransport::new(Cursor::new(input.into_bytes()), Vec::new());
    transport.serve(&handler).await.unwrap();

    let output = String::from_utf8(transport.into_writer()).unwrap();
    let lines: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(lines[1]["error"]["code"], error_codes::PARSE_ERROR);
    assert!(lines[2]["result"]["contents"][0]["text"]
        .as_str()
        .unwrap()
        .contains("\"name\": \"HQ\""));
    assert_eq!(lines[3]["result"]["tools"].as_array().unwrap().len(), 6);
}
