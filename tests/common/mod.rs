#![allow(dead_code)]

use async_trait::async_trait;
use meraki_mcp::core::{ApiRequest, DashboardApi, HttpMethod};
use meraki_mcp::{MerakiError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory Dashboard keyed by request path. Unknown paths answer 404.
#[derive(Default)]
pub struct FakeDashboard {
    routes: HashMap<String, Value>,
    pub requests: Mutex<Vec<(HttpMethod, String, Option<Value>)>>,
}

impl FakeDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, response: Value) -> Self {
        self.routes.insert(path.to_string(), response);
        self
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, path, _)| path.clone())
            .collect()
    }

    pub fn writes(&self) -> Vec<(String, Value)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(method, _, _)| *method != HttpMethod::Get)
            .map(|(_, path, body)| (path.clone(), body.clone().unwrap_or(Value::Null)))
            .collect()
    }
}

#[async_trait]
impl DashboardApi for FakeDashboard {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().unwrap().push((
            request.method,
            request.path.clone(),
            request.body.clone(),
        ));
        if request.method != HttpMethod::Get {
            return Ok(request.body.unwrap_or(Value::Null));
        }
        self.routes
            .get(&request.path)
            .cloned()
            .ok_or_else(|| MerakiError::Api {
                status: 404,
                message: "Not found".to_string(),
            })
    }
}
