//! HTTP middleware for request processing.
//!
//! Provides request id handling and observability middleware.

pub mod request_id;
pub mod tracing;
