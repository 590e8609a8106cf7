pub mod issue_otp;
pub mod register;
pub mod sign_in;
pub mod verify_otp;

pub use issue_otp::issue_otp;
pub use register::{register, Session};
pub use sign_in::sign_in;
pub use verify_otp::{verify_otp, InvalidCodeReason, VerifyOutcome};
