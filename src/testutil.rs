//! Test fakes for the engine's collaborators
//!
//! A canned [`Transport`] and an in-memory [`RecordStore`] so the engine and
//! the API handlers can be exercised without a network or a database.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::engine::{NormalizedOutboundRequest, Transport, TransportFailure, TransportResponse};
use crate::error::{CourierError, Result};
use crate::models::{ExchangeRecord, NewExchange};
use crate::repository::RecordStore;

/// Canned transport: replays one configured reply for every send
pub struct StubTransport {
    reply: std::result::Result<TransportResponse, TransportFailure>,
    delay: Option<Duration>,
    seen: Mutex<Vec<NormalizedOutboundRequest>>,
}

impl StubTransport {
    pub fn respond(response: TransportResponse) -> Self {
        Self {
            reply: Ok(response),
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn fail(failure: TransportFailure) -> Self {
        Self {
            reply: Err(failure),
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn ok_with_body(body: &str) -> Self {
        Self::respond(TransportResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: HashMap::new(),
            body: body.to_string(),
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests the stub has seen, in order
    pub fn seen(&self) -> Vec<NormalizedOutboundRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(
        &self,
        request: &NormalizedOutboundRequest,
        _timeout: Duration,
    ) -> std::result::Result<TransportResponse, TransportFailure> {
        self.seen.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.reply.clone()
    }
}

/// In-memory record store
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    records: Vec<ExchangeRecord>,
    next_id: i64,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    pub fn records(&self) -> Vec<ExchangeRecord> {
        self.inner.lock().unwrap().records.clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, exchange: &NewExchange) -> Result<i64> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;

        inner.records.push(ExchangeRecord {
            id,
            method: exchange.method.clone(),
            url: exchange.url.clone(),
            headers: serde_json::to_value(&exchange.headers).unwrap_or_default(),
            body: exchange.body.clone(),
            body_type: exchange.body_type.as_str().to_string(),
            response: serde_json::to_value(&exchange.response).unwrap_or_default(),
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ExchangeRecord>> {
        let inner = self.inner.lock().unwrap();
        let mut records = inner.records.clone();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.cmp(&a.id))
        });
        records.truncate(limit.max(0) as usize);
        Ok(records)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ExchangeRecord>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        Ok(inner.records.len() < before)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let removed = inner.records.len() as u64;
        inner.records.clear();
        Ok(removed)
    }
}

/// Store whose every operation fails, for persistence-failure paths
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn create(&self, _exchange: &NewExchange) -> Result<i64> {
        Err(CourierError::DatabaseConnection("store offline".to_string()))
    }

    async fn list_recent(&self, _limit: i64) -> Result<Vec<ExchangeRecord>> {
        Err(CourierError::DatabaseConnection("store offline".to_string()))
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<ExchangeRecord>> {
        Err(CourierError::DatabaseConnection("store offline".to_string()))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool> {
        Err(CourierError::DatabaseConnection("store offline".to_string()))
    }

    async fn delete_all(&self) -> Result<u64> {
        Err(CourierError::DatabaseConnection("store offline".to_string()))
    }
}
