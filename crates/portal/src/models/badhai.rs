//! Badhai (felicitation) board domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use samaj_core::BadhaiId;

/// A felicitation announcement (wedding, achievement, new arrival, ...).
#[derive(Debug, Clone, Serialize)]
pub struct Badhai {
    /// Unique announcement ID.
    pub id: BadhaiId,
    /// Person being congratulated.
    pub person_name: String,
    /// What is being celebrated.
    pub occasion: String,
    /// Date of the occasion.
    pub event_date: NaiveDate,
    /// City of the family.
    pub city: String,
    /// Free-form details.
    pub details: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for posting a felicitation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBadhaiInput {
    /// Person being congratulated.
    pub person_name: String,
    /// What is being celebrated.
    pub occasion: String,
    /// Date of the occasion.
    pub event_date: NaiveDate,
    /// City of the family.
    pub city: String,
    /// Free-form details.
    pub details: Option<String>,
}

/// Input for updating a felicitation. Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBadhaiInput {
    /// Person being congratulated.
    pub person_name: Option<String>,
    /// What is being celebrated.
    pub occasion: Option<String>,
    /// Date of the occasion.
    pub event_date: Option<NaiveDate>,
    /// City of the family.
    pub city: Option<String>,
    /// Free-form details.
    pub details: Option<String>,
}
