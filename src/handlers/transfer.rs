use axum::{extract::State, response::IntoResponse};
use serde_json::json;

use crate::handlers::records::created_with;
use crate::middleware::JsonPayload;
use crate::types::payloads::TransferPayload;
use crate::{RegistryError, router::RegistryState};

/// POST /ownership_transfer/ -> runs the transfer; responds 201 with the new `Transfer_ID`.
pub async fn transfer_ownership(
    State(state): State<RegistryState>,
    JsonPayload(payload): JsonPayload<TransferPayload>,
) -> Result<impl IntoResponse, RegistryError> {
    let req = payload.validate()?;
    let record = state
        .transfers
        .transfer(req.vehicle_id, req.new_owner_id)
        .await?;
    Ok(created_with("Transfer_ID", json!(record.transfer_id)))
}
