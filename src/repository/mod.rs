//! Record store for request/response exchanges

pub mod exchange;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ExchangeRecord, NewExchange};

pub use exchange::ExchangeRepository;

/// Durable storage for exchange records.
///
/// Injected into the API layer as a trait object so handlers can run against
/// a fake store in tests.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist one completed exchange, returning its assigned id
    async fn create(&self, exchange: &NewExchange) -> Result<i64>;

    /// Most recent records, newest first
    async fn list_recent(&self, limit: i64) -> Result<Vec<ExchangeRecord>>;

    /// Single record by id
    async fn get_by_id(&self, id: i64) -> Result<Option<ExchangeRecord>>;

    /// Delete one record; true when a row existed
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Delete all records, returning how many were removed
    async fn delete_all(&self) -> Result<u64>;
}
