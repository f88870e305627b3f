//! Bearer token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Check its shape and compare it against the configured token
//! 3. Reject unauthorized requests with HTTP 401 before any handler runs

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::AppError};

/// Bearer token authentication middleware function.
///
/// # Flow
///
/// 1. Extract the `Authorization` header from the request
/// 2. Split it into exactly two space-separated parts, `Bearer` and the token
/// 3. Compare the token part against the configured token
/// 4. If it matches: call the next handler with the request unmodified
/// 5. If it does not: return 401 Unauthorized
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer abc123xyz
/// ```
///
/// A missing header or a mismatched token yields the plain `Unauthorized`
/// message; a header of the wrong shape (not two parts, wrong scheme, empty
/// token) yields the format-hint variant. The comparison is against the
/// extracted token part only, never the whole header value.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    // Step 2: Expect exactly "Bearer <token>"
    let parts: Vec<&str> = auth_header.split(' ').collect();
    let [scheme, token] = parts.as_slice() else {
        return Err(AppError::MalformedAuthHeader);
    };
    if *scheme != "Bearer" || token.is_empty() {
        return Err(AppError::MalformedAuthHeader);
    }

    // Step 3: Compare the token part against the configured token
    if *token != state.auth_token {
        return Err(AppError::Unauthorized);
    }

    // Step 4: Call the next middleware/handler
    Ok(next.run(request).await)
}
