pub mod otp_code;
pub mod profile;

pub use otp_code::{generate_otp_code, OtpCode, OTP_VALIDITY_MINUTES};
pub use profile::{is_admin_email, Profile};
