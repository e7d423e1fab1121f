//! Application layer services implementing business logic.
//!
//! Services consume the store trait and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Alias assignment, resolution and removal

pub mod services;
