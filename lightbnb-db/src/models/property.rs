//! Property records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Column list shared by every property query, in table order.
pub(crate) const PROPERTY_COLUMNS: &str = "properties.id, properties.owner_id, \
     properties.title, properties.description, properties.thumbnail_photo_url, \
     properties.cover_photo_url, properties.cost_per_night, properties.parking_spaces, \
     properties.number_of_bathrooms, properties.number_of_bedrooms, properties.country, \
     properties.street, properties.city, properties.province, properties.post_code";

/// Property record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Property with its aggregated review score, as returned by search.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

/// The fourteen insertable property fields.
///
/// Bound positionally in this order; nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}
