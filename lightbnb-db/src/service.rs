//! Query service: the six operations over an injected pool
//!
//! [`PropertyStore`] is the seam callers program against; [`QueryService`]
//! is the PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::filters::PropertySearch;
use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationSummary, User};
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// Read/write access to users, properties, and reservations (testable)
#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn fetch_user_by_id(&self, id: i32) -> Result<Option<User>>;

    /// The password must already be hashed.
    async fn insert_user(&self, user: &NewUser) -> Result<User>;

    async fn list_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: u32,
    ) -> Result<Vec<ReservationSummary>>;

    async fn search_properties(
        &self,
        search: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>>;

    async fn insert_property(&self, property: &NewProperty) -> Result<Property>;
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct QueryService {
    pool: PgPool,
}

impl QueryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PropertyStore for QueryService {
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>> {
        UserRepo::new(&self.pool).find_by_email(email).await
    }

    async fn fetch_user_by_id(&self, id: i32) -> Result<Option<User>> {
        UserRepo::new(&self.pool).find_by_id(id).await
    }

    async fn insert_user(&self, user: &NewUser) -> Result<User> {
        let created = UserRepo::new(&self.pool).create(user).await?;
        tracing::debug!(user_id = created.id, "user created");
        Ok(created)
    }

    async fn list_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: u32,
    ) -> Result<Vec<ReservationSummary>> {
        ReservationRepo::new(&self.pool)
            .list_for_guest(guest_id, limit)
            .await
    }

    async fn search_properties(
        &self,
        search: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>> {
        PropertyRepo::new(&self.pool).search(search, limit).await
    }

    async fn insert_property(&self, property: &NewProperty) -> Result<Property> {
        let created = PropertyRepo::new(&self.pool).create(property).await?;
        tracing::debug!(property_id = created.id, owner_id = created.owner_id, "property created");
        Ok(created)
    }
}
