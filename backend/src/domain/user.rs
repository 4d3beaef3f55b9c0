//! User data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registered workshop attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Stable user identifier
    #[schema(example = 1)]
    pub user_id: i32,
    /// Full name shown in the admin views
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// Contact email
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Optional contact phone number
    pub phone: Option<String>,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}
