//! Submit application action

use tracing::info;
use uuid::Uuid;

use crate::common::validation::{
    validate_email, validate_family_size, validate_full_name, validate_message, validate_required,
};
use crate::common::ApiError;
use crate::domains::applications::models::{HousingApplication, NewHousingApplication};
use crate::kernel::ServerDeps;

/// Raw submission payload, pre-validation.
#[derive(Debug, Clone)]
pub struct SubmitApplicationInput {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub governorate: String,
    pub housing_type: String,
    pub family_size: Option<i32>,
    pub employment_status: Option<String>,
    pub message: Option<String>,
}

/// Validate and store one housing application for a signed-in profile.
pub async fn submit_application(
    profile_id: Uuid,
    input: SubmitApplicationInput,
    deps: &ServerDeps,
) -> Result<HousingApplication, ApiError> {
    let full_name = input.full_name.trim();
    let email = input.email.trim().to_lowercase();
    validate_full_name(full_name)?;
    validate_email(&email)?;
    validate_required("governorate", &input.governorate, "Governorate")?;
    validate_required("housingType", &input.housing_type, "Housing type")?;
    validate_message(input.message.as_deref())?;
    validate_family_size(input.family_size)?;

    let new = NewHousingApplication {
        profile_id,
        full_name: full_name.to_string(),
        email,
        phone: input.phone.filter(|p| !p.trim().is_empty()),
        governorate: input.governorate.trim().to_string(),
        housing_type: input.housing_type.trim().to_string(),
        family_size: input.family_size,
        employment_status: input.employment_status.filter(|s| !s.trim().is_empty()),
        message: input.message.filter(|m| !m.trim().is_empty()),
    };

    let application = HousingApplication::insert(&new, &deps.db_pool)
        .await
        .map_err(ApiError::Storage)?;

    info!(
        application_id = %application.id,
        profile_id = %profile_id,
        governorate = %application.governorate,
        "Application submitted"
    );
    Ok(application)
}
