//! Domain layer containing the business entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Business logic
//! lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
