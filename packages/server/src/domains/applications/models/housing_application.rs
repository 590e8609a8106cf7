use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// One submitted housing application.
///
/// `status` starts at "pending"; approved/rejected are reserved for review
/// tooling. Rows are never deleted here.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HousingApplication {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub governorate: String,
    pub housing_type: String,
    pub family_size: Option<i32>,
    pub employment_status: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Field set accepted from the submission form.
#[derive(Debug, Clone)]
pub struct NewHousingApplication {
    pub profile_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub governorate: String,
    pub housing_type: String,
    pub family_size: Option<i32>,
    pub employment_status: Option<String>,
    pub message: Option<String>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl HousingApplication {
    /// Insert a new application with pending status
    pub async fn insert(new: &NewHousingApplication, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO housing_applications (
                profile_id, full_name, email, phone, governorate,
                housing_type, family_size, employment_status, message, status
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending')
             RETURNING *",
        )
        .bind(new.profile_id)
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.governorate)
        .bind(&new.housing_type)
        .bind(new.family_size)
        .bind(&new.employment_status)
        .bind(&new.message)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// All applications, newest first (admin listing)
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM housing_applications ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
