//! Authentication Middleware
//!
//! JWT validation middleware for protected routes. Tokens are issued by the
//! authentication service and verified here with the shared access key.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// Access token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub id: String,
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Authenticated user extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
}

/// Decode and validate an HS256 access token.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::Unauthorized("token kedaluwarsa".into()),
        _ => AppError::Unauthorized("token tidak valid".into()),
    })?;

    if token_data.claims.id.is_empty() {
        return Err(AppError::Unauthorized("klaim token tidak valid".into()));
    }

    Ok(token_data.claims)
}

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::Unauthorized("autentikasi dibutuhkan".into()))?;

    let claims = verify_token(bearer.token(), &state.settings.jwt.secret)?;

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(AuthUser {
        user_id: claims.id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}
