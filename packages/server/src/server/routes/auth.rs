//! Authentication endpoints.

use axum::extract::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::auth::actions::{issue_otp, register, sign_in, verify_otp, VerifyOutcome};
use crate::domains::auth::models::Profile;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    pub email: String,
    pub full_name: String,
}

/// POST /api/auth/send-otp
pub async fn send_otp_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SendOtpRequest>,
) -> Result<Json<Value>, ApiError> {
    issue_otp(&payload.email, &payload.full_name, &state.deps).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/auth/verify-otp
///
/// A rejected code is a negative result, not an HTTP error: the response is
/// 200 with valid=false and a message distinguishing "no live code" from
/// "wrong digits".
pub async fn verify_otp_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ApiError> {
    let response = match verify_otp(&payload.email, &payload.code, &state.deps).await? {
        VerifyOutcome::Valid { full_name } => VerifyOtpResponse {
            valid: true,
            full_name: Some(full_name),
            reason: None,
            error: None,
        },
        VerifyOutcome::Invalid { reason } => VerifyOtpResponse {
            valid: false,
            full_name: None,
            reason: Some(reason.as_str()),
            error: Some(reason.message().to_string()),
        },
    };
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub code: String,
    pub password: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub profile: ProfileResponse,
}

/// Profile as exposed over the API (no password hash).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub country: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name,
            email: profile.email,
            country: profile.country,
            is_admin: profile.is_admin,
            created_at: profile.created_at,
        }
    }
}

/// POST /api/auth/register
pub async fn register_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = register(
        &payload.full_name,
        &payload.email,
        &payload.code,
        &payload.password,
        payload.country.as_deref(),
        &state.deps,
    )
    .await?;

    Ok(Json(SessionResponse {
        token: session.token,
        profile: session.profile.into(),
    }))
}

/// POST /api/auth/sign-in
pub async fn sign_in_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = sign_in(&payload.email, &payload.password, &state.deps).await?;

    Ok(Json(SessionResponse {
        token: session.token,
        profile: session.profile.into(),
    }))
}
