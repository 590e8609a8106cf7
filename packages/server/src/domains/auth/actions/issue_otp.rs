//! OTP issuance action

use tracing::{error, info};

use crate::common::validation::{validate_email, validate_full_name};
use crate::common::ApiError;
use crate::domains::auth::models::{generate_otp_code, OtpCode, OTP_VALIDITY_MINUTES};
use crate::kernel::ServerDeps;

/// Issue a fresh verification code for an email and dispatch it.
///
/// 1. Validate inputs; nothing is touched on failure
/// 2. Invalidate every prior unused code for the email
/// 3. Insert the new code row
/// 4. Send the code by email
///
/// A storage failure stops before dispatch. A dispatch failure surfaces as
/// `Delivery`, but the stored row stays valid so the caller can resend.
pub async fn issue_otp(
    email: &str,
    full_name: &str,
    deps: &ServerDeps,
) -> Result<OtpCode, ApiError> {
    let email = email.trim().to_lowercase();
    let full_name = full_name.trim();
    validate_email(&email)?;
    validate_full_name(full_name)?;

    let invalidated = OtpCode::invalidate_for_email(&email, &deps.db_pool)
        .await
        .map_err(ApiError::Storage)?;
    if invalidated > 0 {
        info!(email = %email, invalidated, "Invalidated previous codes");
    }

    let code = generate_otp_code();
    let otp = OtpCode::create(&email, full_name, &code, &deps.db_pool)
        .await
        .map_err(ApiError::Storage)?;

    let html = verification_email_html(full_name, &code);
    match deps
        .mailer
        .send_email(&email, "Your SHIFT Verification Code", &html)
        .await
    {
        Ok(message_id) => {
            info!(email = %email, message_id = %message_id, "Verification code sent");
            Ok(otp)
        }
        Err(e) => {
            error!(email = %email, error = %e, "Failed to send verification code");
            Err(ApiError::Delivery(e.to_string()))
        }
    }
}

/// HTML body for the verification email: greeting, code, expiry notice.
fn verification_email_html(full_name: &str, code: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
  <body style="font-family: sans-serif; background-color: #f5f5f5; margin: 0; padding: 20px;">
    <div style="max-width: 480px; margin: 0 auto; background-color: #ffffff; border-radius: 12px; padding: 40px;">
      <h1 style="color: #1a1a1a; font-size: 24px; text-align: center;">Welcome to SHIFT</h1>
      <p style="color: #666666; font-size: 16px; text-align: center;">Hi {full_name}, here's your verification code:</p>
      <div style="background-color: #f0f9ff; border-radius: 8px; padding: 24px; text-align: center;">
        <span style="font-size: 36px; font-weight: bold; color: #0ea5e9; letter-spacing: 8px;">{code}</span>
      </div>
      <p style="color: #888888; font-size: 14px; text-align: center;">This code expires in {minutes} minutes.</p>
      <p style="color: #888888; font-size: 14px; text-align: center;">If you didn't request this code, please ignore this email.</p>
    </div>
  </body>
</html>"##,
        full_name = full_name,
        code = code,
        minutes = OTP_VALIDITY_MINUTES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_body_carries_code_and_expiry_notice() {
        let html = verification_email_html("Ahmed", "123456");
        assert!(html.contains("Hi Ahmed"));
        assert!(html.contains("123456"));
        assert!(html.contains("expires in 10 minutes"));
    }
}
