//! Store trait for alias → URL mappings.

use crate::domain::entities::NewMapping;
use async_trait::async_trait;
use thiserror::Error;

/// Column guarded by a unique constraint that rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Alias,
    Url,
}

/// Closed set of failures a [`MappingStore`] can report.
///
/// Backends translate their driver-specific faults into these kinds, so
/// callers never inspect driver internals.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key on {0:?}")]
    DuplicateKey(UniqueField),

    #[error("mapping not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Durable persistence of mappings with a uniqueness guarantee on `alias`.
///
/// The unique index on `alias` is the source of truth for alias uniqueness;
/// existence checks made by callers beforehand are advisory only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Inserts a new mapping and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if a unique constraint rejects the row.
    async fn insert(&self, new_mapping: NewMapping) -> Result<i64, StoreError>;

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping has this alias.
    async fn find_by_alias(&self, alias: &str) -> Result<String, StoreError>;

    /// Checks whether a mapping with `alias` exists.
    async fn exists_by_alias(&self, alias: &str) -> Result<bool, StoreError>;

    /// Deletes the mapping with `alias`.
    ///
    /// Succeeds whether or not a row matched; only backend faults are errors.
    async fn delete_by_alias(&self, alias: &str) -> Result<(), StoreError>;

    /// Creates the backing table and its unique alias index if missing.
    ///
    /// Idempotent; called on every process start.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
