use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::Value;
use yansi::Paint;

use super::ClassicApi;
use crate::config;
use crate::error::{ApiError, ApiResult};

static SILENT: AtomicBool = AtomicBool::new(false);

/// Maximum retries for throttled / transient responses.
const MAX_RETRIES: u32 = 3;
/// Base delay between retries (doubled each attempt).
const BASE_DELAY_MS: u64 = 500;

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

fn should_retry(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// HTTP transport for classic resources living under the ARM endpoint.
#[derive(Clone)]
pub struct ClassicClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    subscription_id: String,
    api_version: String,
}

impl ClassicClient {
    pub fn new(
        base_url: &str,
        access_token: &str,
        subscription_id: &str,
        api_version: &str,
    ) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("azclassic/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: config::sanitize_base_url(base_url),
            access_token: access_token.to_string(),
            subscription_id: subscription_id.to_string(),
            api_version: api_version.to_string(),
        })
    }

    /// Build a client from the environment (see [`crate::config`]).
    pub fn from_env() -> ApiResult<Self> {
        Self::new(
            &config::get_management_url(),
            &config::get_access_token(),
            &config::get_subscription_id(),
            &config::get_api_version(),
        )
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Absolute URL for a resource id; `nextLink` values pass through untouched.
    pub fn resource_url(&self, resource: &str) -> String {
        if resource.starts_with("http://") || resource.starts_with("https://") {
            return resource.to_string();
        }
        if resource.starts_with('/') {
            format!("{}{}", self.base_url, resource)
        } else {
            format!("{}/{}", self.base_url, resource)
        }
    }

    fn query_for(&self, url: &str, params: &[(String, String)]) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = params.to_vec();
        let has_version = url.contains("api-version=") || query.iter().any(|(k, _)| k == "api-version");
        if !has_version {
            query.push(("api-version".to_string(), self.api_version.clone()));
        }
        query
    }

    fn auth_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if self.access_token.is_empty() {
            return Ok(headers);
        }
        let val = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .map_err(|e| ApiError::InvalidRequest(format!("Header value error: {}", e)))?;
        headers.insert(AUTHORIZATION, val);
        Ok(headers)
    }

    fn echo_request(&self, method: &Method, url: &str, query: &[(String, String)], body: Option<&Value>) {
        let mut url_for_log = url.to_string();
        if !query.is_empty() {
            let query_string = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<String>>()
                .join("&");
            let sep = if url.contains('?') { "&" } else { "?" };
            url_for_log = format!("{}{}{}", url_for_log, sep, query_string);
        }

        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)));
        if !self.access_token.is_empty() {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Authorization: Bearer ***'").fg(yansi::Color::Magenta)
            ));
        }
        if let Some(d) = body {
            let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
            let escaped_json = json_str.replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
    }

    /// Send one request, retrying throttled and transient failures with
    /// exponential backoff. An empty success body yields `Value::Null`.
    async fn send(
        &self,
        method: Method,
        resource: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let url = self.resource_url(resource);
        let query = self.query_for(&url, params);
        let headers = self.auth_headers()?;
        self.echo_request(&method, &url, &query, body);

        for attempt in 0..=MAX_RETRIES {
            let mut req = self
                .http
                .request(method.clone(), &url)
                .headers(headers.clone())
                .query(&query);
            if let Some(b) = body {
                req = req.json(b);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;
            let status = resp.status();

            if status.is_success() {
                let text = resp
                    .text()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));
                if text.trim().is_empty() {
                    return Ok(Value::Null);
                }
                return serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()));
            }

            if should_retry(status.as_u16()) && attempt < MAX_RETRIES {
                let delay = BASE_DELAY_MS * 2u64.pow(attempt);
                tracing::warn!("Azure {} {} -> {}, retrying in {}ms", method, url, status, delay);
                tokio::time::sleep(Duration::from_millis(delay)).await;
                continue;
            }

            let text = resp.text().await.unwrap_or_default();
            log_output(format!("Response:\n{}", Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red)));
            return Err(ApiError::from_status(status.as_u16(), &text));
        }

        Err(ApiError::Network("Max retries exceeded".to_string()))
    }
}

#[async_trait]
impl ClassicApi for ClassicClient {
    async fn get(&self, resource: &str, params: &[(String, String)]) -> ApiResult<Value> {
        self.send(Method::GET, resource, params, None).await
    }

    async fn list(&self, resource_type: &str, params: &[(String, String)]) -> ApiResult<Vec<Value>> {
        if self.subscription_id.is_empty() {
            return Err(ApiError::InvalidRequest("subscription id is not configured".to_string()));
        }
        let mut url = format!("/subscriptions/{}/providers/{}", self.subscription_id, resource_type);
        let mut items = Vec::new();
        let mut page_params = params.to_vec();
        loop {
            tracing::debug!("Azure paginate: {}", url);
            let page = self.send(Method::GET, &url, &page_params, None).await?;
            if let Some(arr) = page.get("value").and_then(|v| v.as_array()) {
                items.extend(arr.iter().cloned());
            }
            match page.get("nextLink").and_then(|v| v.as_str()) {
                Some(next) if !next.is_empty() => {
                    url = next.to_string();
                    // nextLink already carries the original query
                    page_params.clear();
                }
                _ => break,
            }
        }
        Ok(items)
    }

    async fn perform(&self, resource: &str, action: &str, body: Option<Value>) -> ApiResult<Value> {
        let target = format!("{}/{}", resource.trim_end_matches('/'), action);
        let body = body.unwrap_or_else(|| serde_json::json!({}));
        self.send(Method::POST, &target, &[], Some(&body)).await
    }

    async fn delete(&self, resource: &str) -> ApiResult<()> {
        self.send(Method::DELETE, resource, &[], None).await?;
        Ok(())
    }

    async fn update(&self, body: Value) -> ApiResult<()> {
        let id = body
            .get("id")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::InvalidRequest("update body has no id".to_string()))?
            .to_string();
        self.send(Method::PUT, &id, &[], Some(&body)).await?;
        Ok(())
    }
}
