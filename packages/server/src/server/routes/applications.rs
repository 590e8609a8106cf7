//! Application submission endpoint.

use axum::extract::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::applications::actions::{submit_application, SubmitApplicationInput};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub governorate: String,
    pub housing_type: String,
    #[serde(default)]
    pub family_size: Option<i32>,
    #[serde(default)]
    pub employment_status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/applications - requires a signed-in profile.
pub async fn submit_application_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    Json(payload): Json<SubmitApplicationRequest>,
) -> Result<Json<Value>, ApiError> {
    let Extension(user) = auth_user.ok_or(ApiError::Unauthorized)?;

    submit_application(
        user.profile_id,
        SubmitApplicationInput {
            full_name: payload.full_name,
            email: payload.email,
            phone: payload.phone,
            governorate: payload.governorate,
            housing_type: payload.housing_type,
            family_size: payload.family_size,
            employment_status: payload.employment_status,
            message: payload.message,
        },
        &state.deps,
    )
    .await?;

    Ok(Json(json!({ "success": true })))
}
