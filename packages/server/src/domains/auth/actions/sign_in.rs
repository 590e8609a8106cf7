//! Password sign-in action

use tracing::info;

use crate::common::ApiError;
use crate::domains::auth::actions::register::Session;
use crate::domains::auth::models::Profile;
use crate::domains::auth::password;
use crate::kernel::ServerDeps;

/// Sign in with email and password.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn sign_in(
    email: &str,
    password_input: &str,
    deps: &ServerDeps,
) -> Result<Session, ApiError> {
    let email = email.trim().to_lowercase();

    let profile = Profile::find_by_email(&email, &deps.db_pool)
        .await
        .map_err(ApiError::Storage)?;

    let profile = match profile {
        Some(p) => p,
        None => {
            return Err(ApiError::validation(
                "credentials",
                "Invalid email or password",
            ))
        }
    };

    let valid = password::verify_password(password_input, &profile.password_hash)
        .map_err(ApiError::Internal)?;
    if !valid {
        return Err(ApiError::validation(
            "credentials",
            "Invalid email or password",
        ));
    }

    let token = deps
        .jwt_service
        .create_token(profile.id, profile.email.clone(), profile.is_admin)
        .map_err(ApiError::Internal)?;

    info!(profile_id = %profile.id, "Signed in");
    Ok(Session { token, profile })
}
