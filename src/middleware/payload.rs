use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::RegistryError;

/// JSON body extractor that ignores `Content-Type` and reports failures as
/// [`RegistryError`]s (plain-text 400/413) instead of axum's default rejections.
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RegistryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(RegistryError::PayloadTooLarge);
            }
            Err(rejection) => return Err(RegistryError::BadRequest(rejection.body_text())),
        };

        let value = serde_json::from_slice::<T>(&body)?;
        Ok(JsonPayload(value))
    }
}

/// Parse an `{id}` path segment; anything but an integer is a 400.
pub fn parse_id(raw: &str) -> Result<i64, RegistryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RegistryError::BadRequest(format!("invalid id `{raw}`")))
}
