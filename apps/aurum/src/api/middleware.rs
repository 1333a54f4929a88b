//! # Middleware Module
//!
//! Rate limiting for the Aurum HTTP API, sized by `[security] rate_limit`
//! or `AURUM_RATE_LIMIT`.

use crate::config::DEFAULT_RATE_LIMIT;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Single limiter shared by every client.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Create the shared limiter. A rate of 0 falls back to the default.
pub fn create_rate_limiter(requests_per_second: u32) -> GlobalRateLimiter {
    let rps = NonZeroU32::new(requests_per_second)
        .or(NonZeroU32::new(DEFAULT_RATE_LIMIT))
        .unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::direct(Quota::per_second(rps)))
}

/// Reject requests beyond the quota with 429 Too Many Requests.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    if limiter.check().is_ok() {
        return Ok(next.run(request).await);
    }
    tracing::warn!(path = %request.uri().path(), "Rate limit exceeded");
    Err((StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"))
}

// =============================================================================
// TESTS
// =============================================================================
