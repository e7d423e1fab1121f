//! Utility functions used across the application.
//!
//! - [`alias`] - Alias generation and validation

pub mod alias;
