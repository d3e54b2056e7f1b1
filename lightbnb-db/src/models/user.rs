use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Password hash, stored exactly as the caller supplied it.
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Fields required to register a user.
///
/// The password must already be hashed.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
