//! Store trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_mapping.rs` for usage examples.

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreError, UniqueField};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
