//! lightbnb-db: data-access layer for LightBnB
//!
//! Parameterized queries over a caller-owned PostgreSQL pool for
//! users, properties, and reservations.
//!
//! # Design Principles
//!
//! - The pool is injected, never global
//! - Not found is `Ok(None)`, failures are `Err(QueryError)`
//! - Search predicates are assembled declaratively, placeholders numbered at render time
//! - [`compat::LegacyQueries`] keeps the log-and-resolve-empty behavior for old callers

pub mod compat;
pub mod error;
pub mod filters;
pub mod models;
pub mod pool;
pub mod repos;
pub mod service;

pub use compat::LegacyQueries;
pub use error::{QueryError, Result};
pub use filters::PropertySearch;
pub use models::{
    NewProperty, NewUser, Property, PropertyListing, ReservationSummary, User,
};
pub use pool::{create_pool, create_pool_with_options};
pub use service::{PropertyStore, QueryService};

/// Row limit applied when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 10;
