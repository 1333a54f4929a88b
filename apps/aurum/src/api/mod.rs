//! # Aurum HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /standards` - List the gold standard table
//! - `GET /standards/{karat}` - Look up one karat
//! - `POST /purity` - Convert a mass between karats
//! - `POST /purity/batch` - Convert several masses
//! - `POST /classify` - Classify a blend to its closest karat
//! - `POST /price` - Price a piece from its weight
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Security Configuration
//!
//! - `[security] cors_origins` / `AURUM_CORS_ORIGINS`: allowed origins, or "*" for all (default: localhost only)
//! - `[security] rate_limit` / `AURUM_RATE_LIMIT`: requests per second (default: 100, 0 to disable)
//! - `[security] api_key` / `AURUM_API_KEY`: if set, requires Bearer token authentication

mod auth;
mod handlers;
mod metrics;
mod middleware;
mod types;

pub use auth::keys_match;
pub use metrics::{Calculation, CalculatorMetrics};
pub use middleware::create_rate_limiter;
pub use types::{
    AlloyMixJson, BatchPurityRequest, BatchPurityResponse, ClassifyRequest, ClassifyResponse,
    FormattedMix, HealthResponse, PriceRequest, PriceResponse, PurityRequest, PurityResponse,
    StandardJson, StandardResponse, StandardsResponse,
};

use crate::config::AppConfig;
use aurum_core::{AurumError, StandardTable};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// The reference table every calculation reads from.
    pub table: &'static StandardTable,
    pub config: Arc<AppConfig>,
    pub metrics: Arc<CalculatorMetrics>,
}

impl AppState {
    /// Create app state over the global SNI table.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            table: StandardTable::global(),
            config: Arc::new(config),
            metrics: Arc::new(CalculatorMetrics::new()),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from the configured origins.
///
/// - any `"*"` entry: allows all origins (development only)
/// - `None`: localhost only
/// - otherwise: the listed origins
fn build_cors_layer(origins: Option<&[String]>) -> CorsLayer {
    match origins {
        Some(origins) if origins.iter().any(|o| o.trim() == "*") => {
            tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            }
        }
        None => {
            tracing::info!("CORS: No origins configured, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing
/// 2. CORS
/// 3. Body limit
/// 4. Rate limiting (if enabled)
/// 5. Authentication (if a key is configured)
pub fn create_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let cors = build_cors_layer(config.security.cors_origins.as_deref());

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/standards", get(handlers::standards_handler))
        .route("/standards/{karat}", get(handlers::standard_handler))
        .route("/purity", post(handlers::purity_handler))
        .route("/purity/batch", post(handlers::purity_batch_handler))
        .route("/classify", post(handlers::classify_handler))
        .route("/price", post(handlers::price_handler))
        .route("/metrics", get(handlers::metrics_handler));

    match config.api_key() {
        Some(key) => {
            tracing::info!("API key authentication enabled");
            router = router.layer(axum_middleware::from_fn_with_state(
                Arc::<str>::from(key),
                auth::api_key_auth_middleware,
            ));
        }
        None => {
            tracing::warn!(
                "API key authentication DISABLED - all endpoints are publicly accessible! \
                 Set AURUM_API_KEY to enable authentication."
            );
        }
    }

    let rate_limit = config.security.rate_limit;
    if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AurumError> {
    let addr = config.bind_address();
    let state = AppState::new(config);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AurumError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Aurum HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AurumError::IoError(format!("Server error: {}", e)))?;

    tracing::info!("Aurum HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
