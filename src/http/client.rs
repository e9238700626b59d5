//! The HTTP client wrapper every service goes through.
//!
//! # Responsibilities
//! - Build absolute URLs from the configured base, a path and query filters
//! - Attach JSON content type and the bearer token, if any
//! - Read JSON bodies as JSON and everything else as text
//! - Fold every outcome into an [`ApiResponse`]
//!
//! # Design Decisions
//! - No retries, no caching: one call, one round trip
//! - No timeout unless configured
//! - Failures are values; nothing here panics or returns `Err` to services

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenProvider;
use crate::config::ApiConfig;
use crate::http::envelope::ApiResponse;
use crate::http::error::ClientError;
use crate::http::payload;
use crate::http::query::{build_url, query_pairs};
use crate::observability::metrics::{self, Outcome};

const JSON: &str = "application/json";

/// Shared REST client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the configured API.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, &(), Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, &(), Some(body)).await
    }

    pub async fn delete<T>(&self, path: &str) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, path, &(), None::<&()>).await
    }

    /// Issue one request and normalize the outcome into an envelope.
    pub async fn request<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
        body: Option<&B>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let started = Instant::now();
        let result = self
            .send(&method, path, query, body)
            .await
            .and_then(|body| payload::decode::<T>(body).map_err(ClientError::from));

        let outcome = match &result {
            Ok(_) => Outcome::Success,
            Err(ClientError::Http { .. }) => Outcome::HttpError,
            Err(ClientError::Network(_)) => Outcome::NetworkError,
            Err(ClientError::Decode(_)) => Outcome::DecodeError,
            Err(ClientError::InvalidUrl { .. }) | Err(ClientError::Encode(_)) => {
                Outcome::InvalidRequest
            }
        };
        metrics::record_request(method.as_str(), outcome, started.elapsed());

        if let Err(e) = &result {
            tracing::warn!(method = %method, path = %path, error = %e, "API request failed");
        }

        result.into()
    }

    async fn send<Q, B>(
        &self,
        method: &Method,
        path: &str,
        query: &Q,
        body: Option<&B>,
    ) -> Result<Value, ClientError>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let pairs = query_pairs(query)?;
        let url = build_url(&self.base_url, path, &pairs)?;

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON));

        if let Some(token) = self.tokens.token() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ClientError::Encode(e.to_string()))?;
            request = request.body(bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains(JSON))
            .unwrap_or(false);
        let text = response.text().await?;

        tracing::debug!(status = status.as_u16(), json = is_json, "Received API response");

        if !status.is_success() {
            let body = if is_json {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            } else {
                Value::String(text)
            };
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        if !is_json {
            return Ok(Value::String(text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Pick the error text for a failed response: the body's `message`, else the
/// body itself, else a generic status line.
pub fn error_message(status: StatusCode, body: &Value) -> String {
    match body {
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ if map.is_empty() => http_error(status),
            _ => body.to_string(),
        },
        Value::String(text) if !text.trim().is_empty() => text.clone(),
        Value::Null | Value::String(_) => http_error(status),
        other => other.to_string(),
    }
}

fn http_error(status: StatusCode) -> String {
    format!("HTTP Error: {}", status.as_u16())
}
