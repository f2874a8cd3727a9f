//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use common::AppError;

/// Authenticated account extracted from the session token
#[derive(Clone, Debug)]
pub struct CurrentAccount {
    pub email: String,
}

/// Bearer authentication middleware.
///
/// Validates the token from the Authorization header, then injects the
/// CurrentAccount into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    request
        .extensions_mut()
        .insert(CurrentAccount { email: claims.sub });

    Ok(next.run(request).await)
}
