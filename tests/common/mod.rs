#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use url_alias::application::services::{AliasPolicy, AliasService};
use url_alias::domain::entities::NewMapping;
use url_alias::domain::repositories::{MappingStore, StoreError};
use url_alias::infrastructure::persistence::MemoryMappingStore;
use url_alias::state::AppState;

/// State backed by a fresh in-memory store, with the store handle returned
/// so tests can seed or inspect it.
pub fn create_test_state(base_url: Option<&str>) -> (AppState, Arc<MemoryMappingStore>) {
    let store = Arc::new(MemoryMappingStore::new());
    let service = AliasService::new(store.clone(), AliasPolicy::default());
    let state = AppState::new(Arc::new(service), base_url.map(str::to_string));

    (state, store)
}

/// State over a store that fails every call.
pub fn create_broken_state() -> AppState {
    let service = AliasService::new(Arc::new(BrokenStore), AliasPolicy::default());
    AppState::new(Arc::new(service), None)
}

pub async fn create_test_mapping(store: &MemoryMappingStore, alias: &str, url: &str) {
    store.insert(NewMapping::new(url, alias)).await.unwrap();
}

/// Store whose backend is always down.
pub struct BrokenStore;

#[async_trait]
impl MappingStore for BrokenStore {
    async fn insert(&self, _new_mapping: NewMapping) -> Result<i64, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn find_by_alias(&self, _alias: &str) -> Result<String, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn exists_by_alias(&self, _alias: &str) -> Result<bool, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn delete_by_alias(&self, _alias: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
