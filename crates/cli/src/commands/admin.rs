//! Admin account management commands.
//!
//! Accounts are provisioned here, never over the portal API without an
//! existing super admin. The very first account has to come from this
//! command.
//!
//! # Usage
//!
//! ```bash
//! # Create an account with a generated password
//! samaj-cli admin create -e seva@samaj.org -n "Seva Admin" -r super_admin
//!
//! # Change an account's role
//! samaj-cli admin set-role -e seva@samaj.org -r standard_admin
//!
//! # Deactivate an account
//! samaj-cli admin deactivate -e seva@samaj.org
//! ```
//!
//! # Environment Variables
//!
//! - `PORTAL_DATABASE_URL` - `PostgreSQL` connection string (falls back
//!   to `DATABASE_URL`)
//! - `PORTAL_ARGON2_*` - Optional argon2id cost overrides, matching the
//!   portal's own configuration

use base64::Engine;
use rand::RngCore;
use sqlx::PgPool;
use thiserror::Error;

use samaj_core::{AdminRole, Email};
use samaj_portal::auth::hash_password;
use samaj_portal::config::HashingConfig;

/// Errors that can occur during admin account operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: standard_admin, super_admin")]
    InvalidRole(String),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Account already exists.
    #[error("Admin account already exists with email: {0}")]
    AccountExists(String),

    /// No account with the given email.
    #[error("No admin account with email: {0}")]
    AccountNotFound(String),

    /// Password hashing failed.
    #[error("Password hashing error: {0}")]
    Hashing(String),

    /// Hashing parameters from the environment are invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Create a new admin account.
///
/// When `password` is `None`, a random one is generated and printed
/// exactly once; only the hash is stored.
///
/// # Errors
///
/// Returns `AdminError` on invalid input, a duplicate email, or a
/// database failure.
pub async fn create_account(
    email: &str,
    full_name: &str,
    role: &str,
    password: Option<&str>,
) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let role: AdminRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let email = Email::parse(email).map_err(|_| AdminError::InvalidEmail(email.to_owned()))?;

    let pool = connect().await?;

    tracing::info!("Creating admin account: {} ({})", email, role);

    let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM admin_account WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(&pool)
        .await?;

    if existing.is_some() {
        return Err(AdminError::AccountExists(email.to_string()));
    }

    let (password, generated) = match password {
        Some(p) => (p.to_owned(), false),
        None => (generate_password(), true),
    };

    let hashing = HashingConfig::from_env().map_err(|e| AdminError::Config(e.to_string()))?;
    let password_hash =
        hash_password(&password, &hashing).map_err(|e| AdminError::Hashing(e.to_string()))?;

    let account_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO admin_account (email, full_name, password_hash, role) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(email.as_str())
    .bind(full_name)
    .bind(&password_hash)
    .bind(role.to_string())
    .fetch_one(&pool)
    .await?;

    tracing::info!(
        "Admin account created! ID: {}, Email: {}, Role: {}",
        account_id,
        email,
        role
    );

    if generated {
        // The only time the generated password is ever shown.
        #[allow(clippy::print_stdout)]
        {
            println!("Generated password (store it now, it is not saved anywhere):");
            println!("  {password}");
        }
    }

    Ok(account_id)
}

/// Change an account's role.
///
/// Takes effect on the account's next request; no token reissue needed.
///
/// # Errors
///
/// Returns `AdminError` on invalid input or if no account matches.
pub async fn set_role(email: &str, role: &str) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let role: AdminRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let email = Email::parse(email).map_err(|_| AdminError::InvalidEmail(email.to_owned()))?;

    let pool = connect().await?;

    let result = sqlx::query("UPDATE admin_account SET role = $2 WHERE email = $1")
        .bind(email.as_str())
        .bind(role.to_string())
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AdminError::AccountNotFound(email.to_string()));
    }

    tracing::info!("Role updated: {} is now {}", email, role);
    Ok(())
}

/// Activate or deactivate an account.
///
/// # Errors
///
/// Returns `AdminError` on invalid input or if no account matches.
pub async fn set_active(email: &str, active: bool) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email).map_err(|_| AdminError::InvalidEmail(email.to_owned()))?;

    let pool = connect().await?;

    let result = sqlx::query("UPDATE admin_account SET active = $2 WHERE email = $1")
        .bind(email.as_str())
        .bind(active)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AdminError::AccountNotFound(email.to_string()));
    }

    if active {
        tracing::info!("Account activated: {}", email);
    } else {
        tracing::info!(
            "Account deactivated: {} (existing tokens stop working on the next request)",
            email
        );
    }

    Ok(())
}

async fn connect() -> Result<PgPool, AdminError> {
    let database_url = std::env::var("PORTAL_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| AdminError::MissingEnvVar("PORTAL_DATABASE_URL"))?;

    tracing::info!("Connecting to portal database...");
    Ok(PgPool::connect(&database_url).await?)
}

/// 24 random bytes, base64url without padding: a 32 character password.
fn generate_password() -> String {
    let mut bytes = [0u8; 24];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_passwords_are_long_and_distinct() {
        let first = generate_password();
        let second = generate_password();

        assert_eq!(first.len(), 32);
        assert_ne!(first, second);
    }
}
