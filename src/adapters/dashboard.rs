use crate::core::{ApiRequest, ConfigProvider, DashboardApi, HttpMethod, PageDirection};
use crate::utils::error::{MerakiError, Result};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Dashboard API client over reqwest.
///
/// Waits out 429 responses (honouring `Retry-After`) and retries 5xx and
/// connection failures up to `max_retries` times before surfacing the error.
/// Paginated GETs follow the `Link` header within the request's page limit.
#[derive(Debug, Clone)]
pub struct MerakiClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    retry_wait: Duration,
}

struct Page {
    value: Value,
    link: Option<String>,
}

impl MerakiClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration, max_retries: u32) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            MerakiError::InvalidConfigValue {
                field: "api_key".to_string(),
                value: "<redacted>".to_string(),
                reason: "API key contains characters not allowed in a header".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("meraki-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries,
            retry_wait: Duration::from_secs(1),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let api_key = config.api_key();
        let api_key = validate_required_field("api_key (MERAKI_API_KEY)", &api_key)?;
        Self::new(
            api_key,
            config.base_url(),
            Duration::from_secs(config.timeout_seconds()),
            config.max_retries(),
        )
    }

    /// Fallback wait used for 5xx retries and 429s without `Retry-After`.
    pub fn with_retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = wait;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        direction: PageDirection,
    ) -> Result<Page> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let mut request = self.client.request(to_reqwest_method(method), url);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            tracing::debug!("📡 {} {} (attempt {})", method, url, attempt);
            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    let err = MerakiError::from(e);
                    if err.is_retryable() && attempt <= self.max_retries {
                        tracing::warn!("⚠️ {} {} failed ({}), retrying", method, url, err);
                        tokio::time::sleep(self.retry_wait).await;
                        continue;
                    }
                    return Err(err);
                }
            };

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt > self.max_retries {
                    return Err(MerakiError::RateLimited { attempts: attempt });
                }
                let wait = retry_after(response.headers()).unwrap_or(self.retry_wait);
                tracing::warn!("⏳ Rate limited on {}, waiting {:?}", url, wait);
                tokio::time::sleep(wait).await;
                continue;
            }
            if status.is_server_error() && attempt <= self.max_retries {
                tracing::warn!("⚠️ {} {} returned {}, retrying", method, url, status);
                tokio::time::sleep(self.retry_wait).await;
                continue;
            }

            let link = response
                .headers()
                .get(reqwest::header::LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| {
                    let rel = match direction {
                        PageDirection::Next => "next",
                        PageDirection::Prev => "prev",
                    };
                    parse_link_header(v, rel)
                });

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                tracing::debug!("API error body: {}", text);
                return Err(MerakiError::Api {
                    status: status.as_u16(),
                    message: api_error_message(&text, status),
                });
            }

            let bytes = response.bytes().await?;
            let value = if bytes.iter().all(|b| b.is_ascii_whitespace()) {
                Value::Null
            } else {
                serde_json::from_slice(&bytes)?
            };
            return Ok(Page { value, link });
        }
    }
}

#[async_trait]
impl DashboardApi for MerakiClient {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let mut url = format!("{}{}", self.base_url, request.path);
        let first = self
            .execute(
                request.method,
                &url,
                &request.query,
                request.body.as_ref(),
                request.direction,
            )
            .await?;

        let mut merged = first.value;
        let mut link = first.link;
        let mut pages_fetched: u32 = 1;

        // Link targets already carry the full query string.
        while let Some(next) = link.take() {
            if !request.pages.allows(pages_fetched) || next == url {
                break;
            }
            url = next;
            let page = self
                .execute(request.method, &url, &[], None, request.direction)
                .await?;
            pages_fetched += 1;
            if page_is_empty(&page.value) {
                break;
            }
            merge_pages(&mut merged, page.value);
            link = page.link;
        }

        if pages_fetched > 1 {
            tracing::debug!("📄 Fetched {} pages from {}", pages_fetched, request.path);
        }
        Ok(merged)
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn retry_after(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Extracts the target of `rel` from an RFC 5988 `Link` header.
pub fn parse_link_header(header: &str, rel: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let start = part.find('<')?;
        let end = part.find('>')?;
        if end <= start {
            return None;
        }
        let params = &part[end + 1..];
        let matches = params.split(';').any(|p| {
            let p = p.trim();
            p == format!("rel={}", rel) || p == format!("rel=\"{}\"", rel)
        });
        matches.then(|| part[start + 1..end].trim().to_string())
    })
}

/// The Dashboard reports failures as `{"errors": ["..."]}`.
fn api_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::Array(errors)) = obj.get("errors") {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| e.as_str().map(str::to_string).unwrap_or_else(|| e.to_string()))
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.trim().to_string()
    }
}

fn page_is_empty(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(obj) => matches!(obj.get("events"), Some(Value::Array(e)) if e.is_empty()),
        Value::Null => true,
        _ => false,
    }
}

fn merge_pages(acc: &mut Value, page: Value) {
    match (acc, page) {
        (Value::Array(items), Value::Array(more)) => items.extend(more),
        (Value::Object(obj), Value::Object(mut more)) => {
            if let (Some(Value::Array(events)), Some(Value::Array(more_events))) =
                (obj.get_mut("events"), more.remove("events"))
            {
                events.extend(more_events);
            }
            for key in ["pageStartAt", "pageEndAt"] {
                if let Some(v) = more.remove(key) {
                    if key == "pageStartAt" {
                        obj.entry(key).or_insert(v);
                    } else {
                        obj.insert(key.to_string(), v);
                    }
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_link_header() {
        let header = "<https://api.meraki.com/api/v1/organizations?startingAfter=a>; rel=first, \
                      <https://api.meraki.com/api/v1/organizations?startingAfter=b>; rel=next";
        assert_eq!(
            parse_link_header(header, "next").as_deref(),
            Some("https://api.meraki.com/api/v1/organizations?startingAfter=b")
        );
        assert_eq!(parse_link_header(header, "prev"), None);
        assert_eq!(
            parse_link_header("<http://x/y>; rel=\"prev\"", "prev").as_deref(),
            Some("http://x/y")
        );
    }

    #[test]
    fn test_api_error_message_uses_errors_array() {
        let msg = api_error_message(r#"{"errors":["Invalid serial","Try again"]}"#, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Invalid serial; Try again");
        assert_eq!(api_error_message("", StatusCode::NOT_FOUND), "Not Found");
    }

    #[test]
    fn test_merge_event_pages() {
        let mut acc = json!({"pageStartAt": "a", "pageEndAt": "b", "events": [{"type": "x"}]});
        merge_pages(
            &mut acc,
            json!({"pageStartAt": "c", "pageEndAt": "d", "events": [{"type": "y"}]}),
        );
        assert_eq!(acc["events"].as_array().unwrap().len(), 2);
        assert_eq!(acc["pageStartAt"], "a");
        assert_eq!(acc["pageEndAt"], "d");
    }

    #[test]
    fn test_merge_array_pages() {
        let mut acc = json!([1, 2]);
        merge_pages(&mut acc, json!([3]));
        assert_eq!(acc, json!([1, 2, 3]));
        assert!(page_is_empty(&json!([])));
        assert!(page_is_empty(&json!({"events": []})));
    }
}
