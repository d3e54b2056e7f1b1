//! Reservation repository

use sqlx::PgPool;

use crate::error::Result;
use crate::models::ReservationSummary;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's reservations, earliest start date first.
    ///
    /// Each row carries the property's average rating across all its reviews;
    /// reservations of unreviewed properties drop out of the inner join.
    pub async fn list_for_guest(&self, guest_id: i32, limit: u32) -> Result<Vec<ReservationSummary>> {
        let rows: Vec<ReservationSummary> = sqlx::query_as(
            r#"
            SELECT
                reservations.id,
                properties.title,
                properties.cost_per_night,
                reservations.start_date,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
