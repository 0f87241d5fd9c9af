//! HTTP route handlers for the portal API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database ping)
//!
//! # Community boards (public reads)
//! GET  /api/members             - Member directory
//! GET  /api/sangathan           - Local chapters
//! GET  /api/badhai              - Congratulations board
//! GET  /api/shok                - Condolences board
//! GET  /api/birthdays           - Birthday board
//! GET  /api/news                - News and announcements
//!
//! # Auth
//! POST /api/auth/login          - Exchange credentials for a bearer token
//! GET  /api/auth/me             - Current admin profile (admin)
//! POST /api/auth/password       - Change own password (admin)
//!
//! # Content management (admin)
//! POST   /api/<board>           - Create an entry
//! PUT    /api/<board>/{id}      - Update an entry
//! DELETE /api/<board>/{id}      - Delete an entry
//!
//! # Account administration (super admin)
//! GET  /api/admins              - List admin accounts
//! POST /api/admins              - Create an admin account
//! PUT  /api/admins/{id}/role    - Change an account's role
//! PUT  /api/admins/{id}/active  - Activate or deactivate an account
//! ```
//!
//! Health endpoints are registered in `main`; everything under `/api`
//! comes from [`routes`].

pub mod admins;
pub mod auth;
pub mod badhai;
pub mod birthdays;
pub mod members;
pub mod news;
pub mod sangathan;
pub mod shok;

use axum::Router;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Default number of entries returned by list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Hard cap on the `limit` query parameter.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Query parameters shared by the board list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}

impl ListParams {
    /// The limit to apply: defaults to 100, clamped to 1..=200.
    #[must_use]
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }
}

/// Reject blank required fields before they reach the database.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

/// Create all `/api` routes for the portal.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/admins", admins::router())
        .nest("/api/members", members::router())
        .nest("/api/sangathan", sangathan::router())
        .nest("/api/badhai", badhai::router())
        .nest("/api/shok", shok::router())
        .nest("/api/birthdays", birthdays::router())
        .nest("/api/news", news::router())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_to_100() {
        let params = ListParams { limit: None };
        assert_eq!(params.effective_limit(), 100);
    }

    #[test]
    fn test_limit_passes_through_in_range() {
        let params = ListParams { limit: Some(50) };
        assert_eq!(params.effective_limit(), 50);
    }

    #[test]
    fn test_limit_is_capped_at_200() {
        let params = ListParams { limit: Some(5000) };
        assert_eq!(params.effective_limit(), 200);
    }

    #[test]
    fn test_zero_and_negative_limits_clamp_to_one() {
        assert_eq!(ListParams { limit: Some(0) }.effective_limit(), 1);
        assert_eq!(ListParams { limit: Some(-10) }.effective_limit(), 1);
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("Jaipur", "city").is_ok());
        assert!(require_non_empty("", "city").is_err());
        assert!(require_non_empty("   ", "city").is_err());
    }
}
