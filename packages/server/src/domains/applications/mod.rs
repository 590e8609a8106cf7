//! Applications domain - housing application intake
//!
//! Responsibilities:
//! - Authenticated application submission with field validation
//! - Admin listing of submitted applications

pub mod actions;
pub mod models;
