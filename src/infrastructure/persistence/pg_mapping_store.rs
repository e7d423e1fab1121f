//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewMapping;
use crate::domain::repositories::{MappingStore, StoreError, UniqueField};

/// Name of the unique index guarding `alias`.
pub const ALIAS_INDEX: &str = "url_mappings_alias_key";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url_mappings (
        id    BIGSERIAL PRIMARY KEY,
        url   TEXT NOT NULL,
        alias VARCHAR(100) NOT NULL
    )
"#;

const CREATE_ALIAS_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS url_mappings_alias_key ON url_mappings (alias)";

/// PostgreSQL store for alias → URL mappings.
///
/// Uses SQLx bound parameters for every query. Driver errors are classified
/// into [`StoreError`] here and nowhere else.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Maps a unique violation to the column it guards, by constraint name.
///
/// Accepts both the index created by [`MappingStore::initialize`] and the
/// `<table>_<column>_key` names PostgreSQL generates for inline `UNIQUE`
/// columns, so schemas that also enforce a unique `url` are classified too.
fn unique_field(constraint: Option<&str>) -> Option<UniqueField> {
    match constraint? {
        name if name == ALIAS_INDEX || name.ends_with("_alias_key") => Some(UniqueField::Alias),
        name if name.ends_with("_url_key") => Some(UniqueField::Url),
        _ => None,
    }
}

fn map_insert_error(e: sqlx::Error) -> StoreError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
        && let Some(field) = unique_field(db.constraint())
    {
        return StoreError::DuplicateKey(field);
    }

    StoreError::Database(e)
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn insert(&self, new_mapping: NewMapping) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO url_mappings (url, alias) VALUES ($1, $2) RETURNING id",
        )
        .bind(new_mapping.url.as_str())
        .bind(new_mapping.alias.as_str())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_insert_error)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url_mappings WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn exists_by_alias(&self, alias: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM url_mappings WHERE alias = $1)",
        )
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn delete_by_alias(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url_mappings WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!(alias, rows = result.rows_affected(), "delete executed");
        Ok(())
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(self.pool.as_ref()).await?;
        sqlx::query(CREATE_ALIAS_INDEX)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
