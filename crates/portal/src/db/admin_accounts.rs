//! Admin account repository for database operations.
//!
//! The password hash stays inside this module except for the two
//! explicit `*_with_hash` lookups used by login and password change.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use samaj_core::{AdminAccountId, AdminRole, Email};

use super::RepositoryError;
use crate::models::admin_account::AdminAccount;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for admin account queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminAccountRow {
    id: i32,
    email: String,
    full_name: String,
    role: String,
    active: bool,
    last_authenticated_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AdminAccountRow> for AdminAccount {
    type Error = RepositoryError;

    fn try_from(row: AdminAccountRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        // Role is stored as text; anything outside the closed enum is
        // treated as corruption, never as some permission level.
        let role: AdminRole = row.role.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })?;

        Ok(Self {
            id: AdminAccountId::new(row.id),
            email,
            full_name: row.full_name,
            role,
            active: row.active,
            last_authenticated_at: row.last_authenticated_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Internal row type that additionally carries the password hash.
#[derive(Debug, sqlx::FromRow)]
struct AdminAccountAuthRow {
    id: i32,
    email: String,
    full_name: String,
    role: String,
    active: bool,
    last_authenticated_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    password_hash: String,
}

impl TryFrom<AdminAccountAuthRow> for (AdminAccount, String) {
    type Error = RepositoryError;

    fn try_from(row: AdminAccountAuthRow) -> Result<Self, Self::Error> {
        let account = AdminAccountRow {
            id: row.id,
            email: row.email,
            full_name: row.full_name,
            role: row.role,
            active: row.active,
            last_authenticated_at: row.last_authenticated_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
        .try_into()?;

        Ok((account, row.password_hash))
    }
}

const ACCOUNT_COLUMNS: &str = "id, email, full_name, role, active, \
     last_authenticated_at, created_at, updated_at";

// =============================================================================
// Repository
// =============================================================================

/// Repository for admin account database operations.
pub struct AdminAccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminAccountRepository<'a> {
    /// Create a new admin account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by its lowercased email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<AdminAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminAccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM admin_account WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Find an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn find_by_id(
        &self,
        id: AdminAccountId,
    ) -> Result<Option<AdminAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminAccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM admin_account WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Find an account by email, returning the stored password hash too.
    ///
    /// Only the login flow should need this.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn find_by_email_with_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(AdminAccount, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminAccountAuthRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS}, password_hash FROM admin_account WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Fetch just the stored password hash for an account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn password_hash(
        &self,
        id: AdminAccountId,
    ) -> Result<Option<String>, RepositoryError> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM admin_account WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(hash)
    }

    /// Record a successful authentication.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn touch_last_authenticated(
        &self,
        id: AdminAccountId,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE admin_account SET last_authenticated_at = $2 WHERE id = $1")
                .bind(id)
                .bind(at)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Create a new admin account.
    ///
    /// The caller supplies an already computed argon2 PHC hash; plaintext
    /// passwords never reach this layer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        full_name: &str,
        password_hash: &str,
        role: AdminRole,
    ) -> Result<AdminAccount, RepositoryError> {
        let row = sqlx::query_as::<_, AdminAccountRow>(&format!(
            "INSERT INTO admin_account (email, full_name, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(email)
        .bind(full_name)
        .bind(password_hash)
        .bind(role.to_string())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// List all admin accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any stored data is invalid.
    pub async fn list_all(&self) -> Result<Vec<AdminAccount>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminAccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM admin_account ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Update an account's role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_role(
        &self,
        id: AdminAccountId,
        role: AdminRole,
    ) -> Result<AdminAccount, RepositoryError> {
        let row = sqlx::query_as::<_, AdminAccountRow>(&format!(
            "UPDATE admin_account SET role = $2 WHERE id = $1 RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(id)
        .bind(role.to_string())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Activate or deactivate an account.
    ///
    /// Accounts are never deleted through the API; deactivation is the
    /// forced-logout mechanism, observed by the guard on the next request.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_active(
        &self,
        id: AdminAccountId,
        active: bool,
    ) -> Result<AdminAccount, RepositoryError> {
        let row = sqlx::query_as::<_, AdminAccountRow>(&format!(
            "UPDATE admin_account SET active = $2 WHERE id = $1 RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(id)
        .bind(active)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Replace an account's password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_password_hash(
        &self,
        id: AdminAccountId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE admin_account SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_row(role: &str) -> AdminAccountRow {
        AdminAccountRow {
            id: 7,
            email: "seva@samaj.org".to_owned(),
            full_name: "Seva Admin".to_owned(),
            role: role.to_owned(),
            active: true,
            last_authenticated_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_decodes_known_role() {
        let account: AdminAccount = sample_row("super_admin").try_into().unwrap();
        assert_eq!(account.id, AdminAccountId::new(7));
        assert_eq!(account.role, AdminRole::SuperAdmin);
        assert_eq!(account.email.as_str(), "seva@samaj.org");
    }

    #[test]
    fn test_row_rejects_unknown_role() {
        let result: Result<AdminAccount, _> = sample_row("root").try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_row_rejects_invalid_email() {
        let mut row = sample_row("standard_admin");
        row.email = "not-an-email".to_owned();
        let result: Result<AdminAccount, _> = row.try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_auth_row_splits_hash_from_account() {
        let row = AdminAccountAuthRow {
            id: 3,
            email: "seva@samaj.org".to_owned(),
            full_name: "Seva Admin".to_owned(),
            role: "standard_admin".to_owned(),
            active: false,
            last_authenticated_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            password_hash: "$argon2id$v=19$m=65536,t=3,p=1$abc$def".to_owned(),
        };

        let (account, hash): (AdminAccount, String) = row.try_into().unwrap();
        assert_eq!(account.role, AdminRole::StandardAdmin);
        assert!(!account.active);
        assert!(hash.starts_with("$argon2id$"));
    }
}
