//! Admin account domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use samaj_core::{AdminAccountId, AdminRole, Email};

/// A back-office account.
///
/// The password hash never leaves the repository layer; this type is safe
/// to serialize into API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdminAccount {
    /// Unique account ID.
    pub id: AdminAccountId,
    /// Login email, stored lowercased.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Permission level.
    pub role: AdminRole,
    /// Whether the account may authenticate. Deactivated accounts keep
    /// their row but fail every login and every guarded request.
    pub active: bool,
    /// When the account last logged in successfully.
    pub last_authenticated_at: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The identity attached to a request once the session guard has run.
///
/// Populated from a fresh account fetch on every request, never from
/// token claims, so `role` can never be stale.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAdmin {
    /// Account ID (the token subject).
    pub id: AdminAccountId,
    /// Login email.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Current permission level.
    pub role: AdminRole,
}

impl From<AdminAccount> for CurrentAdmin {
    fn from(account: AdminAccount) -> Self {
        Self {
            id: account.id,
            email: account.email,
            full_name: account.full_name,
            role: account.role,
        }
    }
}
