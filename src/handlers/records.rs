use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use crate::db::models::{
    Owner, OwnershipTransfer, Vehicle, VehicleInspection, VehicleInsurance, VehicleTax,
};
use crate::middleware::{JsonPayload, parse_id};
use crate::types::payloads::{
    InspectionPayload, InsurancePayload, OwnerPayload, TaxPayload, VehiclePayload,
};
use crate::{RegistryError, router::RegistryState};

pub const CREATED_MESSAGE: &str = "Data added successfully";

pub(crate) fn created() -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({ "message": CREATED_MESSAGE })))
}

/// 201 body carrying one extra field next to the message.
pub(crate) fn created_with(key: &str, value: Value) -> (StatusCode, Json<Value>) {
    let mut body = Map::new();
    body.insert("message".to_string(), Value::from(CREATED_MESSAGE));
    body.insert(key.to_string(), value);
    (StatusCode::CREATED, Json(Value::Object(body)))
}

/// GET /vehicles/{id}
pub async fn get_vehicle(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, RegistryError> {
    let id = parse_id(&id)?;
    debug!(id, "fetch vehicle");
    Ok(Json(state.store.get_vehicle(id).await?))
}

/// GET /owners/{id}
pub async fn get_owner(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<Owner>, RegistryError> {
    let id = parse_id(&id)?;
    debug!(id, "fetch owner");
    Ok(Json(state.store.get_owner(id).await?))
}

/// GET /ownership_transfer/{id}
pub async fn get_transfer(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<OwnershipTransfer>, RegistryError> {
    let id = parse_id(&id)?;
    debug!(id, "fetch ownership transfer");
    Ok(Json(state.store.get_transfer(id).await?))
}

/// GET /vehicle_insurance/{id}
pub async fn get_insurance(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleInsurance>, RegistryError> {
    let id = parse_id(&id)?;
    debug!(id, "fetch vehicle insurance");
    Ok(Json(state.store.get_insurance(id).await?))
}

/// GET /vehicle_tax/{id}
pub async fn get_tax(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleTax>, RegistryError> {
    let id = parse_id(&id)?;
    debug!(id, "fetch vehicle tax");
    Ok(Json(state.store.get_tax(id).await?))
}

/// GET /vehicle_inspection/{id}
pub async fn get_inspection(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleInspection>, RegistryError> {
    let id = parse_id(&id)?;
    debug!(id, "fetch vehicle inspection");
    Ok(Json(state.store.get_inspection(id).await?))
}

/// Any unmatched path: GET (and HEAD) lists every vehicle, other methods are 404.
pub async fn fallback(
    State(state): State<RegistryState>,
    method: Method,
    uri: Uri,
) -> Result<Response, RegistryError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(RegistryError::UnknownRoute {
            method: method.to_string(),
            path: uri.path().to_string(),
        });
    }
    let vehicles = state.store.list_vehicles().await?;
    debug!(path = %uri.path(), count = vehicles.len(), "list vehicles");
    Ok(Json(vehicles).into_response())
}

/// POST /owners/
pub async fn create_owner(
    State(state): State<RegistryState>,
    JsonPayload(payload): JsonPayload<OwnerPayload>,
) -> Result<impl IntoResponse, RegistryError> {
    let owner = payload.validate()?;
    state.store.insert_owner(&owner).await?;
    info!(owner_id = owner.owner_id, "owner created");
    Ok(created())
}

/// POST /vehicles/
pub async fn create_vehicle(
    State(state): State<RegistryState>,
    JsonPayload(payload): JsonPayload<VehiclePayload>,
) -> Result<impl IntoResponse, RegistryError> {
    let vehicle = payload.validate()?;
    state.store.insert_vehicle(&vehicle).await?;
    info!(
        vehicle_id = vehicle.vehicle_id,
        owner_id = vehicle.owner_id,
        "vehicle created"
    );
    Ok(created())
}

/// POST /vehicle_insurance/
pub async fn create_insurance(
    State(state): State<RegistryState>,
    JsonPayload(payload): JsonPayload<InsurancePayload>,
) -> Result<impl IntoResponse, RegistryError> {
    let insurance = payload.validate()?;
    state.store.insert_insurance(&insurance).await?;
    info!(
        insurance_id = insurance.insurance_id,
        vehicle_id = insurance.vehicle_id,
        "vehicle insurance added"
    );
    Ok(created())
}

/// POST /vehicle_tax/
pub async fn create_tax(
    State(state): State<RegistryState>,
    JsonPayload(payload): JsonPayload<TaxPayload>,
) -> Result<impl IntoResponse, RegistryError> {
    let tax = payload.validate()?;
    state.store.insert_tax(&tax).await?;
    info!(tax_id = tax.tax_id, vehicle_id = tax.vehicle_id, "vehicle tax added");
    Ok(created())
}

/// POST /vehicle_inspection/
pub async fn create_inspection(
    State(state): State<RegistryState>,
    JsonPayload(payload): JsonPayload<InspectionPayload>,
) -> Result<impl IntoResponse, RegistryError> {
    let inspection = payload.validate()?;
    state.store.insert_inspection(&inspection).await?;
    info!(
        inspection_id = inspection.inspection_id,
        vehicle_id = inspection.vehicle_id,
        "vehicle inspection added"
    );
    Ok(created())
}
