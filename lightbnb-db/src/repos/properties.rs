//! Property repository
//!
//! Filtered search with aggregated ratings, and listing creation.

use sqlx::PgPool;

use crate::error::{QueryError, Result};
use crate::filters::{build_search_query, PropertySearch};
use crate::models::{NewProperty, Property, PropertyListing};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties, cheapest first.
    ///
    /// Filters are ANDed; `minimum_rating` is checked after grouping.
    pub async fn search(&self, search: &PropertySearch, limit: u32) -> Result<Vec<PropertyListing>> {
        let mut builder = build_search_query(search, limit);
        tracing::debug!(sql = builder.sql(), ?search, limit, "searching properties");

        let rows = builder
            .build_query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Insert a property and return the stored row.
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING
                id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(self.pool)
        .await
        .map_err(QueryError::from_insert)
    }
}
