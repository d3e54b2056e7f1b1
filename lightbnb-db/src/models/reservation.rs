use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One reservation as shown in a guest's list, joined with its property.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub id: i32,
    pub title: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub start_date: NaiveDate,
    pub average_rating: f64,
}
