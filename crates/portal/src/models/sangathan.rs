//! Sangathan (organization chapter) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use samaj_core::SangathanId;

/// An organization chapter.
#[derive(Debug, Clone, Serialize)]
pub struct Sangathan {
    /// Unique chapter ID.
    pub id: SangathanId,
    /// Chapter name.
    pub name: String,
    /// City the chapter operates in.
    pub city: String,
    /// Current president, if recorded.
    pub president_name: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a chapter.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSangathanInput {
    /// Chapter name.
    pub name: String,
    /// City the chapter operates in.
    pub city: String,
    /// Current president.
    pub president_name: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
}

/// Input for updating a chapter. Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSangathanInput {
    /// Chapter name.
    pub name: Option<String>,
    /// City the chapter operates in.
    pub city: Option<String>,
    /// Current president.
    pub president_name: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
}
