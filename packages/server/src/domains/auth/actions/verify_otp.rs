//! OTP verification action

use tracing::{error, info};

use crate::common::ApiError;
use crate::domains::auth::models::OtpCode;
use crate::kernel::ServerDeps;

/// Why a code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCodeReason {
    /// No unused, unexpired code exists for the email.
    InvalidOrExpired,
    /// A live code exists but the supplied digits do not match it.
    InvalidCode,
}

impl InvalidCodeReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidCodeReason::InvalidOrExpired => "invalid_or_expired",
            InvalidCodeReason::InvalidCode => "invalid_code",
        }
    }

    /// User-facing message for the rejection.
    pub fn message(&self) -> &'static str {
        match self {
            InvalidCodeReason::InvalidOrExpired => "Invalid or expired code",
            InvalidCodeReason::InvalidCode => "Invalid code",
        }
    }
}

/// Result of verifying a code
#[derive(Debug, Clone)]
pub enum VerifyOutcome {
    Valid { full_name: String },
    Invalid { reason: InvalidCodeReason },
}

/// Verify a user-supplied code against the stored live code for an email.
///
/// Comparison is exact-string against the newest unused, unexpired row; the
/// input is not reformatted here. A mismatch leaves the row untouched so the
/// caller may retry until expiry. A match flips the row to used.
pub async fn verify_otp(
    email: &str,
    code: &str,
    deps: &ServerDeps,
) -> Result<VerifyOutcome, ApiError> {
    let email = email.trim().to_lowercase();

    let record = OtpCode::find_active(&email, &deps.db_pool)
        .await
        .map_err(ApiError::Storage)?;

    let record = match record {
        Some(r) => r,
        None => {
            info!(email = %email, "No live code for email");
            return Ok(VerifyOutcome::Invalid {
                reason: InvalidCodeReason::InvalidOrExpired,
            });
        }
    };

    if record.code != code {
        info!(email = %email, "Code mismatch");
        return Ok(VerifyOutcome::Invalid {
            reason: InvalidCodeReason::InvalidCode,
        });
    }

    // Verification already succeeded at this point; a failed flag update is
    // logged but does not reverse the result.
    if let Err(e) = OtpCode::mark_used(record.id, &deps.db_pool).await {
        error!(email = %email, otp_id = %record.id, error = %e, "Failed to mark code used");
    }

    info!(email = %email, "Code verified");
    Ok(VerifyOutcome::Valid {
        full_name: record.full_name,
    })
}
