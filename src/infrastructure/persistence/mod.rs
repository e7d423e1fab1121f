//! Mapping store implementations.
//!
//! - [`PgMappingStore`] - PostgreSQL storage via SQLx
//! - [`MemoryMappingStore`] - in-process storage for local runs and tests

pub mod memory_mapping_store;
pub mod pg_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
