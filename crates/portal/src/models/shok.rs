//! Shok (obituary) board domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use samaj_core::ShokId;

/// An obituary announcement.
#[derive(Debug, Clone, Serialize)]
pub struct Shok {
    /// Unique announcement ID.
    pub id: ShokId,
    /// Name of the deceased.
    pub deceased_name: String,
    /// Date of death.
    pub date_of_death: NaiveDate,
    /// City of the family.
    pub city: String,
    /// Details of the prayer meeting or ceremony.
    pub ceremony_details: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for posting an obituary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShokInput {
    /// Name of the deceased.
    pub deceased_name: String,
    /// Date of death.
    pub date_of_death: NaiveDate,
    /// City of the family.
    pub city: String,
    /// Details of the prayer meeting or ceremony.
    pub ceremony_details: Option<String>,
}

/// Input for updating an obituary. Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShokInput {
    /// Name of the deceased.
    pub deceased_name: Option<String>,
    /// Date of death.
    pub date_of_death: Option<NaiveDate>,
    /// City of the family.
    pub city: Option<String>,
    /// Details of the prayer meeting or ceremony.
    pub ceremony_details: Option<String>,
}
