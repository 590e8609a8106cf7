//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to domain actions. External services
//! sit behind trait abstractions so tests can inject mocks.

use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::auth::JwtService;
use crate::kernel::mailer::BaseMailer;

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub mailer: Arc<dyn BaseMailer>,
    /// JWT service for token creation
    pub jwt_service: Arc<JwtService>,
    /// Emails granted admin privileges at registration
    pub admin_emails: Vec<String>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        db_pool: PgPool,
        mailer: Arc<dyn BaseMailer>,
        jwt_service: Arc<JwtService>,
        admin_emails: Vec<String>,
    ) -> Self {
        Self {
            db_pool,
            mailer,
            jwt_service,
            admin_emails,
        }
    }
}
