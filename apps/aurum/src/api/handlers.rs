//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    metrics::Calculation,
    types::{
        BatchPurityRequest, BatchPurityResponse, ClassifyRequest, ClassifyResponse,
        HealthResponse, PriceRequest, PriceResponse, PurityRequest, PurityResponse,
        StandardJson, StandardResponse, StandardsResponse,
    },
};
use aurum_core::{AurumError, Karat, price_from_weight, primitives::MAX_BATCH_SIZE};
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

/// 400 for bad input, 500 for anything else.
fn rejection_status(error: &AurumError) -> StatusCode {
    if error.is_input_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STANDARDS HANDLERS
// =============================================================================

/// List the reference table.
pub async fn standards_handler(State(state): State<AppState>) -> impl IntoResponse {
    let standards: Vec<StandardJson> = state.table.iter().map(StandardJson::from).collect();
    Json(StandardsResponse {
        count: standards.len(),
        standards,
    })
}

/// Look up one karat.
pub async fn standard_handler(
    State(state): State<AppState>,
    Path(karat): Path<u32>,
) -> impl IntoResponse {
    match state.table.lookup(Karat::new(karat)) {
        Ok(standard) => (StatusCode::OK, Json(StandardResponse::found(standard))),
        Err(e) => (StatusCode::NOT_FOUND, Json(StandardResponse::error(e.to_string()))),
    }
}

// =============================================================================
// PURITY HANDLERS
// =============================================================================

/// Run one conversion and record it.
fn convert(state: &AppState, request: &PurityRequest) -> Result<PurityResponse, AurumError> {
    match state
        .table
        .convert_purity(request.weight, request.current(), request.desired())
    {
        Ok(mix) => {
            tracing::debug!(
                weight = request.weight,
                current = %request.current(),
                desired = %request.desired(),
                total_mass = mix.total_mass,
                "purity conversion"
            );
            state.metrics.record_completed(Calculation::Purity);
            Ok(PurityResponse::success(&mix))
        }
        Err(e) => {
            tracing::warn!(
                weight = request.weight,
                current = %request.current(),
                desired = %request.desired(),
                error = %e,
                "purity conversion rejected"
            );
            state.metrics.record_rejected(Calculation::Purity);
            Err(e)
        }
    }
}

/// Convert a mass from one karat to another.
pub async fn purity_handler(
    State(state): State<AppState>,
    Json(request): Json<PurityRequest>,
) -> impl IntoResponse {
    match convert(&state, &request) {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => (rejection_status(&e), Json(PurityResponse::error(e.to_string()))),
    }
}

/// Convert several masses; each item succeeds or fails on its own.
pub async fn purity_batch_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchPurityRequest>,
) -> impl IntoResponse {
    if request.items.len() > MAX_BATCH_SIZE {
        return (
            StatusCode::BAD_REQUEST,
            Json(BatchPurityResponse::error(format!(
                "Batch of {} items exceeds maximum {}",
                request.items.len(),
                MAX_BATCH_SIZE
            ))),
        );
    }

    let results = request
        .items
        .iter()
        .map(|item| {
            convert(&state, item).unwrap_or_else(|e| PurityResponse::error(e.to_string()))
        })
        .collect();

    (StatusCode::OK, Json(BatchPurityResponse::success(results)))
}

// =============================================================================
// CLASSIFY HANDLER
// =============================================================================

/// Classify a blend to its closest karat.
pub async fn classify_handler(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let mix = request.to_mix();
    let karat = match state.table.classify_mix(&mix) {
        Ok(karat) => karat,
        Err(e) => {
            tracing::warn!(total = mix.total(), error = %e, "classification rejected");
            state.metrics.record_rejected(Calculation::Classify);
            return (
                rejection_status(&e),
                Json(ClassifyResponse::error(e.to_string())),
            );
        }
    };

    match state.table.lookup(karat) {
        Ok(standard) => {
            tracing::debug!(gold = mix.gold, karat = %karat, "classification");
            state.metrics.record_completed(Calculation::Classify);
            (StatusCode::OK, Json(ClassifyResponse::success(standard, mix.gold)))
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ClassifyResponse::error(e.to_string())),
        ),
    }
}

// =============================================================================
// PRICE HANDLER
// =============================================================================

/// Price a piece from its weight and the gold price per gram.
pub async fn price_handler(
    State(state): State<AppState>,
    Json(request): Json<PriceRequest>,
) -> impl IntoResponse {
    match price_from_weight(request.weight, request.price_per_gram) {
        Ok(price) => {
            tracing::debug!(weight = request.weight, price, "price from weight");
            state.metrics.record_completed(Calculation::Price);
            (StatusCode::OK, Json(PriceResponse::success(price)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "price calculation rejected");
            state.metrics.record_rejected(Calculation::Price);
            (rejection_status(&e), Json(PriceResponse::error(e.to_string())))
        }
    }
}

// =============================================================================
// METRICS HANDLER
// =============================================================================

/// Prometheus metrics.
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(state.table.len()),
    )
}
