//! # cantinho-api
//!
//! HTTP surface of the Cantinho backend: access-code accounts plus the
//! reminder, medication, routine, memory and note collections, served by
//! axum over a [`cantinho_db::Database`].
//!
//! The binary in `main.rs` loads configuration, installs logging, opens the
//! store with [`open_database`] and serves [`app`].

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use cantinho_core::{Medication, Memory, Note, Reminder, Routine};
use cantinho_db::{Database, PoolConfig};

use crate::config::{ServerConfig, StoreBackend};
use crate::handlers::{auth, health, memories, resources};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// CORS
// =============================================================================

/// Parse configured origins into header values, dropping invalid ones.
fn parse_allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}

/// Any origin with credentials unless a whitelist is configured.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    match config.cors_allowed_origins {
        None => CorsLayer::very_permissive(),
        Some(ref origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(parse_allowed_origins(origins)))
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .allow_credentials(true)
            .expose_headers([header::HeaderName::from_static("x-request-id")])
            .max_age(Duration::from_secs(3600)),
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the full router with middleware.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Accounts
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // Owner-scoped collections
        .merge(resources::routes::<Reminder>())
        .merge(resources::routes::<Medication>())
        .merge(resources::routes::<Routine>())
        .merge(resources::routes::<Note>())
        .merge(resources::list_and_delete_routes::<Memory>())
        .route("/memorias", post(memories::create))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer(config))
        // Enforced by the extractors, so oversize bodies still get a JSON
        // 413 with CORS and request-id headers
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(state)
}

// =============================================================================
// STORE SELECTION
// =============================================================================

/// Open the configured store once.
///
/// A missing or unreachable PostgreSQL store is logged and yields a
/// [`Database::unavailable`] handle so the server still starts in
/// service-degraded mode.
pub async fn open_database(config: &ServerConfig) -> Database {
    match config.store_backend {
        StoreBackend::Memory => {
            warn!(
                subsystem = "db",
                store = "memory",
                "Using in-memory document store; data is lost on restart"
            );
            Database::in_memory()
        }
        StoreBackend::Postgres => {
            let Some(url) = config.database_url.as_deref() else {
                error!(
                    subsystem = "db",
                    store = "postgres",
                    "DATABASE_URL is not set; starting in service-degraded mode"
                );
                return Database::unavailable();
            };

            let pool_config = PoolConfig::new().max_connections(config.db_max_connections);
            match Database::connect(url, pool_config).await {
                Ok(db) => {
                    info!(subsystem = "db", store = "postgres", "Document store ready");
                    db
                }
                Err(e) => {
                    error!(
                        subsystem = "db",
                        store = "postgres",
                        error = %e,
                        "Document store unavailable; starting in service-degraded mode"
                    );
                    Database::unavailable()
                }
            }
        }
    }
}
