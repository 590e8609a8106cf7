//! Application setup and server configuration.

use std::sync::Arc;

use axum::extract::Extension;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use resend::{ResendOptions, ResendService};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::auth::JwtService;
use crate::kernel::{BaseMailer, ResendAdapter, ServerDeps};
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{admin, applications, auth, health};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: ServerDeps,
}

/// Build the Axum application router from configuration.
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let resend = Arc::new(ResendService::new(ResendOptions {
        api_key: config.resend_api_key.clone(),
        from_address: config.email_from.clone(),
    }));
    let mailer: Arc<dyn BaseMailer> = Arc::new(ResendAdapter::new(resend));
    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));

    let deps = ServerDeps::new(
        pool.clone(),
        mailer,
        jwt_service.clone(),
        config.admin_emails.clone(),
    );

    build_router(pool, deps, jwt_service, &config.allowed_origins)
}

/// Assemble the router around prebuilt dependencies (tests inject mocks here).
pub fn build_router(
    pool: PgPool,
    deps: ServerDeps,
    jwt_service: Arc<JwtService>,
    allowed_origins: &[String],
) -> Router {
    let state = AppState { db_pool: pool, deps };

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/auth/send-otp", post(auth::send_otp_handler))
        .route("/api/auth/verify-otp", post(auth::verify_otp_handler))
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/sign-in", post(auth::sign_in_handler))
        .route(
            "/api/applications",
            post(applications::submit_application_handler),
        )
        .route(
            "/api/admin/applications",
            get(admin::list_applications_handler),
        )
        .route("/api/admin/profiles", get(admin::list_profiles_handler))
        .layer(middleware::from_fn(
            move |request: axum::extract::Request, next: axum::middleware::Next| {
                jwt_auth_middleware(jwt_service.clone(), request, next)
            },
        ))
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// CORS layer from the configured origins; permissive when none are set.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        layer.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
