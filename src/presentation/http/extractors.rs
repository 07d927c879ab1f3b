//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::error::AppError;

const INVALID_BODY_MESSAGE: &str = "body request harus berupa objek JSON yang valid";

/// JSON request body whose rejection is reported in the API's error envelope.
///
/// Structural problems (not JSON, wrong content type, not an object) are
/// rejected here; missing or mistyped properties are left to the entities.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::BadRequest(INVALID_BODY_MESSAGE.into())
            })?;

        // Payload structs are all-optional, so arrays and scalars would
        // otherwise decode as an empty payload.
        if !value.is_object() {
            tracing::debug!(body = %value, "Rejected non-object request body");
            return Err(AppError::BadRequest(INVALID_BODY_MESSAGE.into()));
        }

        let payload = serde_json::from_value::<T>(value).map_err(|e| {
            tracing::debug!(error = %e, "Request body does not fit payload");
            AppError::BadRequest(INVALID_BODY_MESSAGE.into())
        })?;

        Ok(Self(payload))
    }
}
