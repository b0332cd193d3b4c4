pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod types;

pub use db::RegistryStore;
pub use error::{RegistryError, Resource};
pub use service::TransferCoordinator;
