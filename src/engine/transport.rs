//! Outbound HTTP transport
//!
//! The engine issues calls through the [`Transport`] trait so tests can run
//! against a canned implementation; [`HttpTransport`] is the reqwest-backed
//! production implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, Method};
use url::Url;

use crate::error::{CourierError, Result};
use crate::models::ResponseOutcome;

use super::normalize_body_text;

/// Outbound request after encoding dispatch and header merging
#[derive(Debug, Clone)]
pub struct NormalizedOutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub payload: Payload,
}

/// Body payload shaped per encoding
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Json(serde_json::Value),
    Text(String),
}

/// Response received from the origin, whatever its status
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Transport-level failure: DNS, refused connection, timeout, TLS.
///
/// Some failures still carry a partial response; its status and body
/// propagate into the outcome when present.
#[derive(Debug, Clone)]
pub struct TransportFailure {
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<String>,
}

impl TransportResponse {
    /// Fold into the unified outcome shape
    pub fn into_outcome(self, elapsed_ms: i64) -> ResponseOutcome {
        ResponseOutcome {
            status: self.status,
            status_text: self.status_text,
            headers: self.headers,
            data: normalize_body_text(self.body),
            time: elapsed_ms,
        }
    }
}

impl TransportFailure {
    /// Fold into the unified outcome shape
    pub fn into_outcome(self, elapsed_ms: i64) -> ResponseOutcome {
        let message = self.message;
        ResponseOutcome {
            status: self.status.unwrap_or(0),
            status_text: message.clone(),
            headers: HashMap::new(),
            data: match self.body {
                Some(body) => normalize_body_text(body),
                None => message,
            },
            time: elapsed_ms,
        }
    }
}

/// Transport capability used by the engine to issue outbound calls
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: &NormalizedOutboundRequest,
        timeout: Duration,
    ) -> std::result::Result<TransportResponse, TransportFailure>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CourierError::Internal(format!("failed to build http client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &NormalizedOutboundRequest,
        timeout: Duration,
    ) -> std::result::Result<TransportResponse, TransportFailure> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .timeout(timeout);

        builder = match &request.payload {
            Payload::Empty => builder,
            Payload::Json(value) => builder.json(value),
            Payload::Text(text) => builder.body(text.clone()),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| failure_from(e, timeout))?;

        let status = response.status();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            headers.insert(name.to_string(), value.to_str().unwrap_or("").to_string());
        }
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers,
            body,
        })
    }
}

fn failure_from(err: reqwest::Error, timeout: Duration) -> TransportFailure {
    let message = if err.is_timeout() {
        format!("timeout of {}ms exceeded", timeout.as_millis())
    } else {
        err.to_string()
    };

    TransportFailure {
        status: err.status().map(|s| s.as_u16()),
        message,
        body: None,
    }
}
