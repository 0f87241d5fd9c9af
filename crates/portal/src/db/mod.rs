//! Database operations for the portal `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `admin_account` - Back-office accounts (password login, role, active flag)
//! - `member` - Community member registry
//! - `sangathan` - Organization chapters
//! - `badhai` - Felicitation announcements
//! - `shok` - Obituary announcements
//! - `birthday` - Birthday announcements
//! - `news` - News articles
//!
//! # Migrations
//!
//! Migrations are stored in `crates/portal/migrations/` and run via:
//! ```bash
//! cargo run -p samaj-cli -- migrate
//! ```
//! They are never run automatically on server startup.

pub mod admin_accounts;
pub mod badhai;
pub mod birthdays;
pub mod members;
pub mod news;
pub mod sangathan;
pub mod shok;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admin_accounts::AdminAccountRepository;
pub use badhai::BadhaiRepository;
pub use birthdays::BirthdayRepository;
pub use members::MemberRepository;
pub use news::NewsRepository;
pub use sangathan::SangathanRepository;
pub use shok::ShokRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
