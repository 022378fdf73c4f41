//! Request translation and execution engine
//!
//! Takes a loosely-typed request description, normalizes it into a
//! well-formed outbound request per body-encoding mode, executes it with a
//! bounded timeout, and folds response and transport failure into one
//! outcome shape. Every HTTP status is a normal completion; only
//! transport-level failures (DNS, refused connection, timeout, TLS) count as
//! execution failures.

pub mod transport;

use std::sync::Arc;
use std::time::{Duration, Instant};

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use tracing::debug;
use url::Url;

use crate::error::{CourierError, Result};
use crate::models::{BodyEncoding, RequestDescription, ResponseOutcome};

pub use transport::{
    HttpTransport, NormalizedOutboundRequest, Payload, Transport, TransportFailure,
    TransportResponse,
};

/// Fixed timeout for outbound calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Verbs accepted from callers
const ALLOWED_METHODS: [Method; 7] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

/// Result of one execution: the unified outcome, plus the failure message
/// when the outbound call never completed
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    pub outcome: ResponseOutcome,
    pub error: Option<String>,
}

impl ExecutionReport {
    /// True when an HTTP response was received, whatever its status
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Request execution engine
pub struct RequestEngine {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl RequestEngine {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Execute one described request.
    ///
    /// Returns an error only for invalid input (unknown verb, unparsable
    /// URL), before any outbound attempt. Once the call is issued, every
    /// completion and every transport failure folds into an
    /// [`ExecutionReport`].
    pub async fn execute(&self, description: &RequestDescription) -> Result<ExecutionReport> {
        let outbound = normalize(description)?;

        debug!(method = %outbound.method, url = %outbound.url, "Dispatching outbound request");

        let start = Instant::now();
        let result = self.transport.send(&outbound, self.timeout).await;
        let elapsed_ms = start.elapsed().as_millis() as i64;

        let report = match result {
            Ok(response) => ExecutionReport {
                outcome: response.into_outcome(elapsed_ms),
                error: None,
            },
            Err(failure) => {
                let message = failure.message.clone();
                ExecutionReport {
                    outcome: failure.into_outcome(elapsed_ms),
                    error: Some(message),
                }
            }
        };

        Ok(report)
    }
}

/// Normalize a request description into a well-formed outbound request.
///
/// Body dispatch applies only when the method is POST/PUT/PATCH and the body
/// is non-empty. The encoding's Content-Type fills in only when the caller
/// did not already supply one (header names compare case-insensitively).
pub fn normalize(description: &RequestDescription) -> Result<NormalizedOutboundRequest> {
    let method = parse_method(&description.method)?;
    let url = parse_url(&description.url)?;

    let mut headers = HeaderMap::new();
    for (name, value) in &description.headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            headers.insert(name, value);
        }
    }

    let payload = match description.body.as_deref() {
        Some(body) if !body.is_empty() && method_takes_body(&method) => {
            let encoding = description.body_type;
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(encoding.content_type()));
            }
            match encoding {
                BodyEncoding::Raw => match serde_json::from_str::<serde_json::Value>(body) {
                    Ok(value) => Payload::Json(value),
                    Err(_) => Payload::Text(body.to_string()),
                },
                BodyEncoding::FormData | BodyEncoding::UrlEncoded => {
                    Payload::Text(body.to_string())
                }
            }
        }
        _ => Payload::Empty,
    };

    Ok(NormalizedOutboundRequest {
        method,
        url,
        headers,
        payload,
    })
}

fn parse_method(raw: &str) -> Result<Method> {
    let canonical = raw.trim().to_uppercase();
    ALLOWED_METHODS
        .iter()
        .find(|m| m.as_str() == canonical)
        .cloned()
        .ok_or_else(|| CourierError::InvalidRequest(format!("unsupported method: {:?}", raw)))
}

fn parse_url(raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(CourierError::InvalidRequest("url is required".into()));
    }

    Url::parse(raw).map_err(|e| CourierError::InvalidRequest(format!("invalid url: {}", e)))
}

/// Verbs whose body goes through encoding dispatch
fn method_takes_body(method: &Method) -> bool {
    matches!(method.as_str(), "POST" | "PUT" | "PATCH")
}

/// Serialize a response payload to text: JSON objects and arrays are
/// pretty-printed with 2-space indentation, everything else passes through
/// unchanged.
pub(crate) fn normalize_body_text(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) if value.is_object() || value.is_array() => {
            serde_json::to_string_pretty(&value).unwrap_or(body)
        }
        _ => body,
    }
}
