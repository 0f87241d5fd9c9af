//! Birthday board repository for database operations.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use samaj_core::BirthdayId;

use super::RepositoryError;
use crate::models::birthday::{Birthday, CreateBirthdayInput, UpdateBirthdayInput};

/// Internal row type for birthday queries.
#[derive(Debug, sqlx::FromRow)]
struct BirthdayRow {
    id: i32,
    person_name: String,
    birth_date: NaiveDate,
    city: String,
    message: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BirthdayRow> for Birthday {
    fn from(row: BirthdayRow) -> Self {
        Self {
            id: BirthdayId::new(row.id),
            person_name: row.person_name,
            birth_date: row.birth_date,
            city: row.city,
            message: row.message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const BIRTHDAY_COLUMNS: &str =
    "id, person_name, birth_date, city, message, created_at, updated_at";

/// Repository for birthday board database operations.
pub struct BirthdayRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BirthdayRepository<'a> {
    /// Create a new birthday repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List birthday entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<Birthday>, RepositoryError> {
        let rows = sqlx::query_as::<_, BirthdayRow>(&format!(
            "SELECT {BIRTHDAY_COLUMNS} FROM birthday \
             ORDER BY birth_date DESC, created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a new birthday entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CreateBirthdayInput) -> Result<Birthday, RepositoryError> {
        let row = sqlx::query_as::<_, BirthdayRow>(&format!(
            "INSERT INTO birthday (person_name, birth_date, city, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {BIRTHDAY_COLUMNS}"
        ))
        .bind(&input.person_name)
        .bind(input.birth_date)
        .bind(&input.city)
        .bind(&input.message)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a birthday entry. Absent fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: BirthdayId,
        input: &UpdateBirthdayInput,
    ) -> Result<Birthday, RepositoryError> {
        let row = sqlx::query_as::<_, BirthdayRow>(&format!(
            "UPDATE birthday SET \
                person_name = COALESCE($2, person_name), \
                birth_date = COALESCE($3, birth_date), \
                city = COALESCE($4, city), \
                message = COALESCE($5, message) \
             WHERE id = $1 \
             RETURNING {BIRTHDAY_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.person_name)
        .bind(input.birth_date)
        .bind(&input.city)
        .bind(&input.message)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a birthday entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: BirthdayId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM birthday WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
