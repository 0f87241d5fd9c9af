//! Member directory repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use samaj_core::{MemberId, SangathanId};

use super::RepositoryError;
use crate::models::member::{CreateMemberInput, Member, UpdateMemberInput};

/// Internal row type for member queries.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i32,
    full_name: String,
    city: String,
    phone: String,
    email: Option<String>,
    occupation: Option<String>,
    sangathan_id: Option<SangathanId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Self {
            id: MemberId::new(row.id),
            full_name: row.full_name,
            city: row.city,
            phone: row.phone,
            email: row.email,
            occupation: row.occupation,
            sangathan_id: row.sangathan_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const MEMBER_COLUMNS: &str =
    "id, full_name, city, phone, email, occupation, sangathan_id, created_at, updated_at";

/// Repository for member database operations.
pub struct MemberRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new member repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List members, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<Member>, RepositoryError> {
        let rows = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a new member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CreateMemberInput) -> Result<Member, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "INSERT INTO member (full_name, city, phone, email, occupation, sangathan_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(&input.full_name)
        .bind(&input.city)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.occupation)
        .bind(input.sangathan_id)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a member. Absent fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the member doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: MemberId,
        input: &UpdateMemberInput,
    ) -> Result<Member, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "UPDATE member SET \
                full_name = COALESCE($2, full_name), \
                city = COALESCE($3, city), \
                phone = COALESCE($4, phone), \
                email = COALESCE($5, email), \
                occupation = COALESCE($6, occupation), \
                sangathan_id = COALESCE($7, sangathan_id) \
             WHERE id = $1 \
             RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.full_name)
        .bind(&input.city)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.occupation)
        .bind(input.sangathan_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the member doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: MemberId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM member WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
