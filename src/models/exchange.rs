use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use std::collections::HashMap;

/// Body encoding mode for outbound requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BodyEncoding {
    #[default]
    #[serde(rename = "raw")]
    Raw,
    #[serde(rename = "form-data")]
    FormData,
    #[serde(rename = "urlencoded")]
    UrlEncoded,
}

impl BodyEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyEncoding::Raw => "raw",
            BodyEncoding::FormData => "form-data",
            BodyEncoding::UrlEncoded => "urlencoded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "raw" => Some(BodyEncoding::Raw),
            "form-data" => Some(BodyEncoding::FormData),
            "urlencoded" => Some(BodyEncoding::UrlEncoded),
            _ => None,
        }
    }

    /// Content-Type applied when the caller did not set one
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyEncoding::Raw => "application/json",
            BodyEncoding::FormData => "multipart/form-data",
            BodyEncoding::UrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

impl std::fmt::Display for BodyEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied description of an outbound request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescription {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub body_type: BodyEncoding,
}

/// Unified response shape for completed calls and transport failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOutcome {
    /// 0 when no response was ever received
    pub status: u16,
    pub status_text: String,
    /// Empty on transport failure
    pub headers: HashMap<String, String>,
    /// Response body as text; JSON objects and arrays are pretty-printed
    pub data: String,
    /// Elapsed whole milliseconds
    pub time: i64,
}

/// Exchange ready for persistence
#[derive(Debug, Clone)]
pub struct NewExchange {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    pub body_type: BodyEncoding,
    pub response: ResponseOutcome,
}

impl NewExchange {
    /// Pair the original description with its execution outcome
    pub fn from_execution(description: &RequestDescription, response: ResponseOutcome) -> Self {
        Self {
            method: description.method.clone(),
            url: description.url.clone(),
            headers: description.headers.clone(),
            body: description.body.clone(),
            body_type: description.body_type,
            response,
        }
    }
}

/// Persisted exchange record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRecord {
    pub id: i64,
    pub method: String,
    pub url: String,
    pub headers: Value,
    pub body: Option<String>,
    pub body_type: String, // Stored as string in DB
    pub response: Value,
    pub created_at: DateTime<Utc>,
}

impl ExchangeRecord {
    /// Get the body encoding enum
    pub fn body_encoding(&self) -> Option<BodyEncoding> {
        BodyEncoding::from_str(&self.body_type)
    }
}
