//! Axum router for JSON-RPC over HTTP, with an optional SSE reply.
//! Routes: `POST /mcp`, `POST /mcp/sse`, `GET /health`.

use crate::mcp::McpHandler;
use crate::transport::auth;
use crate::utils::error::Result;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{
        sse::{Event, KeepAlive},
        IntoResponse, Response, Sse,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub const SSE_KEEP_ALIVE: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<McpHandler>,
    /// Bearer token; `None` disables authentication.
    pub token: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/mcp/sse", post(handle_mcp_sse))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: AppState, address: &str) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!(
        "🚀 MCP server on http://{}/mcp with {} tools",
        address,
        state.handler.registry().len()
    );
    if state.token.is_none() {
        tracing::warn!("⚠️ HTTP transport has no bearer token configured");
    }
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "protocol": "MCP JSON-RPC 2.0",
        "tools": state.handler.registry().len()
    }))
}

async fn handle_mcp(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    let sse = wants_event_stream(&headers);
    answer(state, &headers, &body, sse).await
}

async fn handle_mcp_sse(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    answer(state, &headers, &body, true).await
}

/// JSON is preferred when the client accepts both.
fn wants_event_stream(headers: &HeaderMap) -> bool {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    accept.contains("text/event-stream") && !accept.contains("application/json")
}

async fn answer(state: AppState, headers: &HeaderMap, body: &str, sse: bool) -> Response {
    if let Some(token) = &state.token {
        if auth::validate_bearer(headers, token).is_err() {
            tracing::warn!("🔒 Rejected request without a valid bearer token");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "unauthorized"})),
            )
                .into_response();
        }
    }

    match state.handler.handle_message(body).await {
        None => StatusCode::NO_CONTENT.into_response(),
        Some(output) if sse => event_stream(output.to_json()).into_response(),
        Some(output) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            output.to_json(),
        )
            .into_response(),
    }
}

/// One `data:` event carrying the response, then keep-alive comments until
/// the client disconnects.
fn event_stream(payload: String) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let events = stream::once(async move { Ok(Event::default().data(payload)) })
        .chain(stream::pending::<std::result::Result<Event, Infallible>>());
    Sse::new(events).keep_alive(KeepAlive::new().interval(SSE_KEEP_ALIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_event_stream_negotiation() {
        assert!(wants_event_stream(&accept("text/event-stream")));
        assert!(!wants_event_stream(&accept("application/json, text/event-stream")));
        assert!(!wants_event_stream(&accept("application/json")));
        assert!(!wants_event_stream(&HeaderMap::new()));
    }
}
