use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

/// How long an issued code stays valid.
pub const OTP_VALIDITY_MINUTES: i64 = 10;

/// One issued verification attempt.
///
/// History is retained: rows are never deleted here, only flipped to used
/// (by verification, or by a newer issuance for the same email).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OtpCode {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub code: String,
    pub used: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl OtpCode {
    /// Flip every unused code for this email to used.
    ///
    /// Invalidation-on-reissue: only the most recent code is ever acceptable.
    pub async fn invalidate_for_email(email: &str, pool: &PgPool) -> Result<u64> {
        let result =
            sqlx::query("UPDATE otp_codes SET used = true WHERE email = $1 AND used = false")
                .bind(email)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Insert a fresh unused code expiring after the validity window.
    pub async fn create(email: &str, full_name: &str, code: &str, pool: &PgPool) -> Result<Self> {
        let expires_at = Utc::now() + Duration::minutes(OTP_VALIDITY_MINUTES);
        sqlx::query_as::<_, Self>(
            "INSERT INTO otp_codes (email, full_name, code, used, expires_at)
             VALUES ($1, $2, $3, false, $4)
             RETURNING *",
        )
        .bind(email)
        .bind(full_name)
        .bind(code)
        .bind(expires_at)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// The single most recently created unused, unexpired code for an email.
    pub async fn find_active(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM otp_codes
             WHERE email = $1 AND used = false AND expires_at > NOW()
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Mark one code as used.
    pub async fn mark_used(id: Uuid, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE otp_codes SET used = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

// =============================================================================
// Code generation
// =============================================================================

/// Produce a 6-digit numeric code, uniform over [100000, 999999].
///
/// The range starts at 100000 so the string form is always six characters.
pub fn generate_otp_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_codes_are_six_ascii_digits() {
        for _ in 0..1000 {
            let code = generate_otp_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(code.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn generated_codes_vary_across_calls() {
        let codes: HashSet<String> = (0..100).map(|_| generate_otp_code()).collect();
        assert!(codes.len() > 1, "100 draws should not all collide");
    }
}
