//! Birthday board domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use samaj_core::BirthdayId;

/// A birthday announcement.
#[derive(Debug, Clone, Serialize)]
pub struct Birthday {
    /// Unique announcement ID.
    pub id: BirthdayId,
    /// Person celebrating.
    pub person_name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// City of the family.
    pub city: String,
    /// Greeting message.
    pub message: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for posting a birthday announcement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBirthdayInput {
    /// Person celebrating.
    pub person_name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// City of the family.
    pub city: String,
    /// Greeting message.
    pub message: Option<String>,
}

/// Input for updating a birthday announcement. Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBirthdayInput {
    /// Person celebrating.
    pub person_name: Option<String>,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// City of the family.
    pub city: Option<String>,
    /// Greeting message.
    pub message: Option<String>,
}
