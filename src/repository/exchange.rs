use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::{ExchangeRecord, NewExchange};

use super::RecordStore;

/// Postgres-backed exchange record store
#[derive(Clone)]
pub struct ExchangeRepository {
    pool: PgPool,
}

impl ExchangeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for ExchangeRepository {
    async fn create(&self, exchange: &NewExchange) -> Result<i64> {
        let headers = serde_json::to_value(&exchange.headers).unwrap_or_default();
        let response = serde_json::to_value(&exchange.response).unwrap_or_default();

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO exchanges (method, url, headers, body, body_type, response)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&exchange.method)
        .bind(&exchange.url)
        .bind(headers)
        .bind(&exchange.body)
        .bind(exchange.body_type.as_str())
        .bind(response)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ExchangeRecord>> {
        let records = sqlx::query_as::<_, ExchangeRecord>(
            r#"
            SELECT id, method, url, headers, body, body_type, response, created_at
            FROM exchanges
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ExchangeRecord>> {
        let record = sqlx::query_as::<_, ExchangeRecord>(
            r#"
            SELECT id, method, url, headers, body, body_type, response, created_at
            FROM exchanges
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exchanges WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM exchanges")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
