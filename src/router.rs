use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::time::Duration;

use crate::db::RegistryStore;
use crate::handlers::{records, transfer};
use crate::service::TransferCoordinator;

/// Shared handler state: the pooled store and the transfer coordinator built over the same pool.
#[derive(Clone)]
pub struct RegistryState {
    pub store: RegistryStore,
    pub transfers: TransferCoordinator,
}

impl RegistryState {
    pub fn new(store: RegistryStore, transfer_deadline: Duration) -> Self {
        let transfers = TransferCoordinator::new(store.pool().clone(), transfer_deadline);
        Self { store, transfers }
    }
}

pub fn registry_router(state: RegistryState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/vehicles/{id}", get(records::get_vehicle))
        .route("/owners/{id}", get(records::get_owner))
        .route("/ownership_transfer/{id}", get(records::get_transfer))
        .route("/vehicle_insurance/{id}", get(records::get_insurance))
        .route("/vehicle_tax/{id}", get(records::get_tax))
        .route("/vehicle_inspection/{id}", get(records::get_inspection))
        .route("/owners/", post(records::create_owner))
        .route("/vehicles/", post(records::create_vehicle))
        .route("/ownership_transfer/", post(transfer::transfer_ownership))
        .route("/vehicle_insurance/", post(records::create_insurance))
        .route("/vehicle_tax/", post(records::create_tax))
        .route("/vehicle_inspection/", post(records::create_inspection))
        // `/` and every unmatched GET list all vehicles
        .fallback(records::fallback)
        .method_not_allowed_fallback(records::fallback)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
