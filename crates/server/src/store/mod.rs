//! Document store behind visit tracking.
//!
//! [`DocumentStore`] is a small schemaless surface: named counters plus
//! JSON records grouped by collection. [`MemoryStore`] backs tests and
//! database-less runs, [`PgStore`] backs production. Handlers never talk to a
//! store directly; they go through [`Telemetry`], which turns every storage
//! failure into a logged warning and a zero or empty result.

mod memory;
mod postgres;
mod telemetry;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use telemetry::Telemetry;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("store configuration error: {0}")]
    Config(String),

    #[error("record fields must be a JSON object, got {0}")]
    InvalidRecord(&'static str),
}

/// A stored record with its bookkeeping columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: Uuid,
    pub collection: String,
    pub fields: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Record {
    /// Stamps a new record with a fresh id and the current time.
    pub fn new(collection: &str, fields: serde_json::Value) -> Result<Self, StoreError> {
        if !fields.is_object() {
            return Err(StoreError::InvalidRecord(json_kind(&fields)));
        }
        let now = OffsetDateTime::now_utc();
        Ok(Self { id: Uuid::new_v4(), collection: collection.to_string(), fields, created_at: now, updated_at: now })
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Counters and schemaless records.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Adds one to `key`, creating it at zero first, and returns the new value.
    async fn increment_counter(&self, key: &str) -> Result<i64, StoreError>;

    /// Current value of `key`; zero when it was never incremented.
    async fn read_counter(&self, key: &str) -> Result<i64, StoreError>;

    /// Stores `fields` in `collection` and returns the new record id.
    async fn create_record(&self, collection: &str, fields: serde_json::Value) -> Result<Uuid, StoreError>;

    /// Newest-first records of `collection` whose fields contain `filter`.
    async fn list_records(
        &self, collection: &str, filter: serde_json::Value, limit: usize,
    ) -> Result<Vec<Record>, StoreError>;
}

/// JSON containment with the semantics of Postgres `jsonb @>`.
///
/// Objects match when every filter key is present and contained, arrays when
/// every filter element is contained in some element, scalars on equality.
pub fn json_contains(value: &serde_json::Value, filter: &serde_json::Value) -> bool {
    use serde_json::Value;

    match (value, filter) {
        (Value::Object(value), Value::Object(filter)) => filter
            .iter()
            .all(|(key, expected)| value.get(key).is_some_and(|actual| json_contains(actual, expected))),
        (Value::Array(value), Value::Array(filter)) => {
            filter.iter().all(|expected| value.iter().any(|actual| json_contains(actual, expected)))
        }
        _ => value == filter,
    }
}
