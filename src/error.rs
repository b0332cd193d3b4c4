use axum::{http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use std::fmt;
use std::time::Duration;
use thiserror::Error as ThisError;

/// The six persisted record kinds served by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Vehicle,
    Owner,
    OwnershipTransfer,
    VehicleInsurance,
    VehicleTax,
    VehicleInspection,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Owner => "owner",
            Self::OwnershipTransfer => "ownership transfer",
            Self::VehicleInsurance => "vehicle insurance",
            Self::VehicleTax => "vehicle tax",
            Self::VehicleInspection => "vehicle inspection",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: i64 },

    #[error("No route for {method} {path}")]
    UnknownRoute { method: String, path: String },

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl RegistryError {
    pub fn not_found(resource: Resource, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) | Self::Json(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound { .. } | Self::UnknownRoute { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        // Plain-text reason; datastore messages are passed through verbatim.
        (status, self.to_string()).into_response()
    }
}
