//! PostgreSQL-backed document store.
//!
//! Every collection shares one `document` table keyed by `(collection, id)`
//! with a JSONB body. Single-statement writes give per-document atomicity;
//! nothing spans documents.

use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{debug, trace};

use cantinho_core::{Document, DocumentStore, Error, Result};

use crate::pool::{connect_pool, PoolConfig};

/// PostgreSQL implementation of [`DocumentStore`].
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Wrap an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect with the given pool configuration.
    pub async fn connect(url: &str, config: &PoolConfig) -> Result<Self> {
        let pool = connect_pool(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Write(format!("migration failed: {}", e)))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let body: Option<Json<Document>> =
            sqlx::query_scalar("SELECT body FROM document WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| Error::Query(e.to_string()))?;
        Ok(body.map(|Json(doc)| doc))
    }

    async fn set(&self, collection: &str, id: &str, doc: Document) -> Result<()> {
        sqlx::query(
            "INSERT INTO document (collection, id, body) VALUES ($1, $2, $3)
             ON CONFLICT (collection, id) DO UPDATE SET body = EXCLUDED.body",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(doc))
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Write(e.to_string()))?;
        trace!(collection, doc_id = id, "Document written");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM document WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Write(e.to_string()))?;
        trace!(
            collection,
            doc_id = id,
            result_count = result.rows_affected(),
            "Document deleted"
        );
        Ok(())
    }

    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &JsonValue,
    ) -> Result<Vec<(String, Document)>> {
        let start = Instant::now();
        let rows: Vec<(String, Json<Document>)> = sqlx::query_as(
            "SELECT id, body FROM document WHERE collection = $1 AND body -> $2 = $3",
        )
        .bind(collection)
        .bind(field)
        .bind(Json(value))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Query(e.to_string()))?;

        debug!(
            subsystem = "db",
            component = "pg_store",
            op = "query_by_field",
            collection,
            field,
            result_count = rows.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Query complete"
        );
        Ok(rows.into_iter().map(|(id, Json(doc))| (id, doc)).collect())
    }

    async fn create(&self, collection: &str, id: &str, doc: Document) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO document (collection, id, body) VALUES ($1, $2, $3)
             ON CONFLICT (collection, id) DO NOTHING",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(doc))
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Write(e.to_string()))?;
        Ok(result.rows_affected() == 1)
    }
}
