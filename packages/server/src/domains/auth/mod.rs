//! Auth domain - email verification (OTP) and password accounts
//!
//! Responsibilities:
//! - OTP issuance and verification against the otp_codes store
//! - Account registration (OTP-gated) and password sign-in
//! - Session/JWT token management

pub mod actions;
pub mod jwt;
pub mod models;
pub mod password;

pub use jwt::{Claims, JwtService};
