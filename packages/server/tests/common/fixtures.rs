//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use server_core::domains::auth::models::{OtpCode, Profile};
use server_core::domains::auth::password;
use sqlx::PgPool;
use uuid::Uuid;

/// Unique email per call; the shared database persists across tests.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4().simple())
}

/// Insert a registered profile directly through the model.
pub async fn create_test_profile(
    pool: &PgPool,
    email: &str,
    password_input: &str,
    is_admin: bool,
) -> Result<Profile> {
    let hash = password::hash_password(password_input)?;
    Profile::create("Test Person", email, &hash, None, is_admin, pool).await
}

/// Insert an OTP row whose expiry has already elapsed.
pub async fn create_expired_otp(pool: &PgPool, email: &str, code: &str) -> Result<OtpCode> {
    let otp = OtpCode::create(email, "Test Person", code, pool).await?;
    sqlx::query("UPDATE otp_codes SET expires_at = NOW() - INTERVAL '1 minute' WHERE id = $1")
        .bind(otp.id)
        .execute(pool)
        .await?;
    Ok(otp)
}
