//! Database module: row models, schema and the SQLite-backed store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, serialized as the wire format
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pooled store with per-resource reads and inserts

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Owner, OwnershipTransfer, Vehicle, VehicleInspection, VehicleInsurance, VehicleTax};
pub use schema::SQLITE_INIT;
pub use sqlite::{RegistryStore, SqlitePool};
