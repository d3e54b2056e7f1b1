//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per call.
//! Lookups return `Ok(None)` for a missing row; inserts return the created
//! row via `RETURNING`.

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
