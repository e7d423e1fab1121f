//! In-process mapping store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingStore, StoreError, UniqueField};

/// A [`MappingStore`] kept in memory.
///
/// Alias uniqueness is enforced atomically through the map's entry API, so
/// it behaves like the unique index of the PostgreSQL store. Data is lost on
/// restart.
///
/// # Use Cases
///
/// - Local runs without PostgreSQL (`STORE_BACKEND=memory`)
/// - HTTP handler tests
pub struct MemoryMappingStore {
    mappings: DashMap<String, Mapping>,
    next_id: AtomicI64,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        Self {
            mappings: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for MemoryMappingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn insert(&self, new_mapping: NewMapping) -> Result<i64, StoreError> {
        match self.mappings.entry(new_mapping.alias.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(UniqueField::Alias)),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                slot.insert(new_mapping.into_mapping(id));
                Ok(id)
            }
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<String, StoreError> {
        self.mappings
            .get(alias)
            .map(|mapping| mapping.url.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn exists_by_alias(&self, alias: &str) -> Result<bool, StoreError> {
        Ok(self.mappings.contains_key(alias))
    }

    async fn delete_by_alias(&self, alias: &str) -> Result<(), StoreError> {
        self.mappings.remove(alias);
        Ok(())
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
