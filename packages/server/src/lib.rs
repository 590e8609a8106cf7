// SHIFT Program - API Core
//
// Backend for the SHIFT civic housing program: email verification via
// one-time passcodes, password-authenticated accounts, housing application
// intake, and admin listings. HTTP handlers stay thin; domain logic lives
// in domains/*/actions and all SQL in domains/*/models.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
