use crate::domain::model::{ApiRequest, PageLimit};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Access to the Meraki Dashboard API. Implemented over HTTP by
/// `adapters::dashboard::MerakiClient`, and by fakes in tests.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;

    async fn get(&self, path: &str) -> Result<Value> {
        self.send(ApiRequest::get(path)).await
    }

    async fn get_with(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let mut request = ApiRequest::get(path);
        for (key, value) in query {
            request = request.query(key, value);
        }
        self.send(request).await
    }

    async fn get_all(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let mut request = ApiRequest::get(path).pages(PageLimit::All);
        for (key, value) in query {
            request = request.query(key, value);
        }
        self.send(request).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn max_retries(&self) -> u32;
    fn profile(&self) -> &str;
    fn custom_modules(&self) -> &[String];
    fn excluded_modules(&self) -> &[String];
    fn read_only(&self) -> bool;
}
