//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`], plus [`NewMapping`] used for
//! inserts before the store assigns an id.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
