//! Log-and-resolve-empty wrapper for callers written against the old helpers
//!
//! Every failure is logged and turned into `None` or an empty list, so a
//! missing row and a failed query look the same. New code should use
//! [`PropertyStore`] directly.

use crate::error::Result;
use crate::filters::PropertySearch;
use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationSummary, User};
use crate::service::PropertyStore;

pub struct LegacyQueries<S> {
    store: S,
}

impl<S: PropertyStore> LegacyQueries<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub async fn get_user_with_email(&self, email: &str) -> Option<User> {
        swallow("get_user_with_email", self.store.fetch_user_by_email(email).await)
    }

    pub async fn get_user_with_id(&self, id: i32) -> Option<User> {
        swallow("get_user_with_id", self.store.fetch_user_by_id(id).await)
    }

    /// `None` on failure; a present value is the stored row.
    pub async fn add_user(&self, user: &NewUser) -> Option<User> {
        swallow("add_user", self.store.insert_user(user).await.map(Some))
    }

    pub async fn get_all_reservations(&self, guest_id: i32, limit: u32) -> Vec<ReservationSummary> {
        swallow(
            "get_all_reservations",
            self.store.list_reservations_for_guest(guest_id, limit).await,
        )
    }

    pub async fn get_all_properties(&self, search: &PropertySearch, limit: u32) -> Vec<PropertyListing> {
        swallow(
            "get_all_properties",
            self.store.search_properties(search, limit).await,
        )
    }

    pub async fn add_property(&self, property: &NewProperty) -> Option<Property> {
        swallow("add_property", self.store.insert_property(property).await.map(Some))
    }
}

fn swallow<T: Default>(operation: &'static str, result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        tracing::error!(operation, error = %err, "query failed");
        T::default()
    })
}
