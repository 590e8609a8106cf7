use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Registered account.
///
/// Emails are stored lowercased. The password hash is argon2id; it never
/// appears in API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub country: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Profile {
    /// Find profile by email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Check if a profile exists for an email
    pub async fn exists_with_email(email: &str, pool: &PgPool) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)")
                .bind(email)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Create a profile
    pub async fn create(
        full_name: &str,
        email: &str,
        password_hash: &str,
        country: Option<&str>,
        is_admin: bool,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO profiles (full_name, email, password_hash, country, is_admin)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .bind(country)
        .bind(is_admin)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// All profiles, newest first (admin listing)
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM profiles ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Check if an email should be granted admin privileges.
///
/// Case-insensitive match against the configured admin list.
pub fn is_admin_email(email: &str, admin_emails: &[String]) -> bool {
    admin_emails
        .iter()
        .any(|admin| admin.eq_ignore_ascii_case(email))
}
