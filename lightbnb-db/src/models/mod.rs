//! Row types read from and written to the store
//!
//! Plain records: no validation happens here, the schema owns integrity.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::ReservationSummary;
pub use user::{NewUser, User};
