//! Admin listing endpoints.

use axum::extract::Extension;
use axum::Json;
use serde::Serialize;

use crate::common::ApiError;
use crate::domains::applications::models::HousingApplication;
use crate::domains::auth::models::Profile;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;
use crate::server::routes::auth::ProfileResponse;

/// Reject callers without an admin token.
fn require_admin(auth_user: Option<Extension<AuthUser>>) -> Result<AuthUser, ApiError> {
    let Extension(user) = auth_user.ok_or(ApiError::Unauthorized)?;
    if !user.is_admin {
        return Err(ApiError::Forbidden);
    }
    Ok(user)
}

#[derive(Serialize)]
pub struct ApplicationsResponse {
    pub applications: Vec<HousingApplication>,
}

/// GET /api/admin/applications - all applications, newest first.
pub async fn list_applications_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<ApplicationsResponse>, ApiError> {
    require_admin(auth_user)?;

    let applications = HousingApplication::list_all(&state.db_pool)
        .await
        .map_err(ApiError::Storage)?;

    Ok(Json(ApplicationsResponse { applications }))
}

#[derive(Serialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<ProfileResponse>,
}

/// GET /api/admin/profiles - all registered profiles, newest first.
pub async fn list_profiles_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<ProfilesResponse>, ApiError> {
    require_admin(auth_user)?;

    let profiles = Profile::list_all(&state.db_pool)
        .await
        .map_err(ApiError::Storage)?;

    Ok(Json(ProfilesResponse {
        profiles: profiles.into_iter().map(Into::into).collect(),
    }))
}
