//! Member registry domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use samaj_core::{MemberId, SangathanId};

/// A registered community member.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    /// Unique member ID.
    pub id: MemberId,
    /// Full name.
    pub full_name: String,
    /// City of residence.
    pub city: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional contact email (informational, not a login).
    pub email: Option<String>,
    /// Optional occupation.
    pub occupation: Option<String>,
    /// Chapter the member belongs to, if any.
    pub sangathan_id: Option<SangathanId>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for registering a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberInput {
    /// Full name.
    pub full_name: String,
    /// City of residence.
    pub city: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Optional occupation.
    pub occupation: Option<String>,
    /// Chapter the member belongs to.
    pub sangathan_id: Option<SangathanId>,
}

/// Input for updating a member. Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemberInput {
    /// Full name.
    pub full_name: Option<String>,
    /// City of residence.
    pub city: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Occupation.
    pub occupation: Option<String>,
    /// Chapter the member belongs to.
    pub sangathan_id: Option<SangathanId>,
}
