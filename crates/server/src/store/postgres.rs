use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::{NoTls, Row};
use uuid::Uuid;

use super::{DocumentStore, Record, StoreError};

const MAX_POOL_SIZE: usize = 16;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS counters (
    key   TEXT PRIMARY KEY,
    value BIGINT NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS records (
    id         UUID PRIMARY KEY,
    collection TEXT NOT NULL,
    fields     JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS records_collection_created_idx ON records (collection, created_at);
"#;

/// Postgres-backed store over a connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    /// Builds the pool for `database_url` and creates the tables if needed.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pg_config: tokio_postgres::Config = database_url.parse()?;
        let manager =
            Manager::from_config(pg_config, NoTls, ManagerConfig { recycling_method: RecyclingMethod::Fast });
        let pool = Pool::builder(manager)
            .max_size(MAX_POOL_SIZE)
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        let store = Self { pool };
        store.migrate().await?;
        tracing::info!("store.postgres.ready");
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        let client = self.pool.get().await?;
        client.batch_execute(SCHEMA).await?;
        Ok(())
    }
}

fn record_from_row(row: &Row) -> Result<Record, StoreError> {
    Ok(Record {
        id: row.try_get("id")?,
        collection: row.try_get("collection")?,
        fields: row.try_get("fields")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn increment_counter(&self, key: &str) -> Result<i64, StoreError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO counters (key, value) VALUES ($1, 1)
                 ON CONFLICT (key) DO UPDATE SET value = counters.value + 1
                 RETURNING value",
                &[&key],
            )
            .await?;
        Ok(row.try_get(0)?)
    }

    async fn read_counter(&self, key: &str) -> Result<i64, StoreError> {
        let client = self.pool.get().await?;
        let row = client.query_opt("SELECT value FROM counters WHERE key = $1", &[&key]).await?;
        match row {
            Some(row) => Ok(row.try_get(0)?),
            None => Ok(0),
        }
    }

    async fn create_record(&self, collection: &str, fields: serde_json::Value) -> Result<Uuid, StoreError> {
        let record = Record::new(collection, fields)?;
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO records (id, collection, fields, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)",
                &[&record.id, &record.collection, &record.fields, &record.created_at, &record.updated_at],
            )
            .await?;
        tracing::debug!(collection, id = %record.id, "store.postgres.record_created");
        Ok(record.id)
    }

    async fn list_records(
        &self, collection: &str, filter: serde_json::Value, limit: usize,
    ) -> Result<Vec<Record>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, collection, fields, created_at, updated_at FROM records
                 WHERE collection = $1 AND fields @> $2
                 ORDER BY created_at DESC
                 LIMIT $3",
                &[&collection, &filter, &limit],
            )
            .await?;
        rows.iter().map(record_from_row).collect()
    }
}
