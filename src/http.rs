//! HTTP client wrapper
//!
//! One configured [`reqwest::Client`] shared by every service. Each call goes
//! through the same interception:
//!
//! - a non-GET call answered with 200, 201 or 204 raises the success
//!   notification;
//! - success bodies are reinflated through the [`jsog`](crate::jsog) codec;
//! - any failure raises one error notification carrying the server's
//!   `userMessage` and is returned to the caller.
//!
//! There is no retry: a failed request is reported once and abandoned.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::{
    config::ApiConfig,
    error::{user_message, ApiError, ApiResult},
    jsog,
    models::QueryParams,
    notification::{Notification, NotificationSink},
};

#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    notifier: Arc<dyn NotificationSink>,
}

impl HttpClient {
    pub fn new(config: &ApiConfig, notifier: Arc<dyn NotificationSink>) -> ApiResult<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Configuration(format!("invalid base URL: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            notifier,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str, params: &QueryParams) -> ApiResult<Value> {
        self.request(Method::GET, path, params, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        self.request(Method::POST, path, params, body).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.request(Method::PUT, path, &QueryParams::new(), Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::DELETE, path, &QueryParams::new(), None).await
    }

    /// Send one request and return its decoded body (`Value::Null` when empty)
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut builder = self.client.request(method.clone(), &url);
        if !params.as_slice().is_empty() {
            builder = builder.query(params.as_slice());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
                self.notifier.notify(Notification::error(None));
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    method = %method,
                    url = %url,
                    error = %e,
                    "Failed reading response body"
                );
                self.notifier.notify(Notification::error(None));
                return Err(ApiError::Transport(e));
            }
        };

        if !status.is_success() {
            let body = parse_error_body(&text);
            let detail = user_message(&body);
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                user_message = detail.as_deref().unwrap_or(""),
                "Request rejected"
            );
            self.notifier.notify(Notification::error(detail.as_deref()));
            return Err(ApiError::Status { status, body });
        }

        if method != Method::GET && is_write_success(status) {
            self.notifier.notify(Notification::success());
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        let raw: Value = serde_json::from_str(&text)?;
        jsog::decode(raw).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn is_write_success(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED || status == StatusCode::NO_CONTENT
}

/// Error payloads are kept raw: JSON when they parse, text otherwise
fn parse_error_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
