use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{DocumentStore, Record, StoreError, json_contains};

/// Records kept by [`MemoryStore::new`] before the oldest are dropped.
pub const DEFAULT_RECORD_CAPACITY: usize = 10_000;

/// In-process store. Contents are lost on restart.
///
/// Holds at most `capacity` records; inserting past that evicts the oldest.
/// Counters are unaffected by eviction.
#[derive(Debug)]
pub struct MemoryStore {
    counters: Mutex<HashMap<String, i64>>,
    records: Mutex<VecDeque<Record>>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECORD_CAPACITY)
    }

    /// Store that keeps at most `capacity` records (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self { counters: Mutex::default(), records: Mutex::default(), capacity: capacity.max(1) }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn increment_counter(&self, key: &str) -> Result<i64, StoreError> {
        let mut counters = self.counters.lock().await;
        let value = counters.entry(key.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn read_counter(&self, key: &str) -> Result<i64, StoreError> {
        Ok(self.counters.lock().await.get(key).copied().unwrap_or(0))
    }

    async fn create_record(&self, collection: &str, fields: serde_json::Value) -> Result<Uuid, StoreError> {
        let record = Record::new(collection, fields)?;
        let id = record.id;
        let mut records = self.records.lock().await;
        while records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record);
        Ok(id)
    }

    async fn list_records(
        &self, collection: &str, filter: serde_json::Value, limit: usize,
    ) -> Result<Vec<Record>, StoreError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.collection == collection && json_contains(&r.fields, &filter))
            .take(limit)
            .cloned()
            .collect())
    }
}
