//! Account registration action - the single sign-up path.

use tracing::info;

use crate::common::validation::{validate_email, validate_full_name, validate_password};
use crate::common::ApiError;
use crate::domains::auth::actions::verify_otp::{verify_otp, VerifyOutcome};
use crate::domains::auth::models::{is_admin_email, Profile};
use crate::domains::auth::password;
use crate::kernel::ServerDeps;

/// A signed-in session: token plus the profile it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub profile: Profile,
}

/// Register an account after proving control of the email.
///
/// Consumes a live OTP for the email (through the same verification service
/// the standalone endpoint uses), hashes the password, and creates the
/// profile. Admin privileges come from the configured admin email list.
pub async fn register(
    full_name: &str,
    email: &str,
    code: &str,
    password_input: &str,
    country: Option<&str>,
    deps: &ServerDeps,
) -> Result<Session, ApiError> {
    let email = email.trim().to_lowercase();
    let full_name = full_name.trim();
    validate_email(&email)?;
    validate_full_name(full_name)?;
    validate_password(password_input)?;

    if Profile::exists_with_email(&email, &deps.db_pool)
        .await
        .map_err(ApiError::Storage)?
    {
        return Err(ApiError::validation("email", "Email already registered"));
    }

    match verify_otp(&email, code, deps).await? {
        VerifyOutcome::Valid { .. } => {}
        VerifyOutcome::Invalid { reason } => {
            return Err(ApiError::validation("code", reason.message()));
        }
    }

    let password_hash = password::hash_password(password_input).map_err(ApiError::Internal)?;
    let is_admin = is_admin_email(&email, &deps.admin_emails);

    let profile = Profile::create(
        full_name,
        &email,
        &password_hash,
        country,
        is_admin,
        &deps.db_pool,
    )
    .await
    .map_err(ApiError::Storage)?;

    let token = deps
        .jwt_service
        .create_token(profile.id, profile.email.clone(), profile.is_admin)
        .map_err(ApiError::Internal)?;

    info!(profile_id = %profile.id, email = %profile.email, is_admin, "Profile registered");
    Ok(Session { token, profile })
}
