use std::sync::Arc;

use serde_json::json;

use super::{DocumentStore, Record};

/// Collection visit records are written to.
pub const VISIT_COLLECTION: &str = "visit";
/// Counter incremented once per tracked visit.
pub const VISITS_COUNTER: &str = "visits";

/// Best-effort visit tracking.
///
/// Never fails: with no store, or when the store errors, every read degrades
/// to zero or empty and every write is dropped after a warning.
#[derive(Clone, Default)]
pub struct Telemetry {
    store: Option<Arc<dyn DocumentStore>>,
}

impl Telemetry {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Tracking with nothing behind it.
    pub fn disabled() -> Self {
        Self { store: None }
    }

    /// Whether the store answered a counter read.
    pub async fn is_connected(&self) -> bool {
        match &self.store {
            Some(store) => match store.read_counter(VISITS_COUNTER).await {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(error = %err, "telemetry.ping.failed");
                    false
                }
            },
            None => false,
        }
    }

    /// Writes a visit record and bumps the visit counter.
    pub async fn record_visit(&self, path: &str, user_agent: Option<&str>) {
        let Some(store) = &self.store else {
            tracing::debug!(path, "telemetry.visit.skipped");
            return;
        };

        if let Err(err) = store
            .create_record(VISIT_COLLECTION, json!({ "path": path, "user_agent": user_agent }))
            .await
        {
            tracing::warn!(error = %err, path, "telemetry.visit.record_failed");
        }
        if let Err(err) = store.increment_counter(VISITS_COUNTER).await {
            tracing::warn!(error = %err, "telemetry.visit.count_failed");
        }
    }

    /// Total tracked visits; zero when unknown.
    pub async fn total_visits(&self) -> i64 {
        let Some(store) = &self.store else {
            return 0;
        };
        store.read_counter(VISITS_COUNTER).await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "telemetry.stats.failed");
            0
        })
    }

    /// Oldest-first visit records, optionally restricted to one path.
    pub async fn visits(&self, path: Option<&str>, limit: usize) -> Vec<Record> {
        let Some(store) = &self.store else {
            return Vec::new();
        };
        let filter = match path {
            Some(path) => json!({ "path": path }),
            None => json!({}),
        };
        store.list_records(VISIT_COLLECTION, filter, limit).await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "telemetry.visits.failed");
            Vec::new()
        })
    }
}
