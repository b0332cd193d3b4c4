#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use vehicle_registry::RegistryStore;
use vehicle_registry::config::DatabaseConfig;
use vehicle_registry::db::Vehicle;

/// A file-backed SQLite database removed on drop (WAL side files included).
pub struct TempDb {
    pub path: PathBuf,
    pub store: RegistryStore,
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}

pub async fn temp_db(tag: &str) -> TempDb {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "vehicle-registry-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let cfg = DatabaseConfig {
        url: format!("sqlite:{}", path.display()),
        max_connections: 4,
        ..DatabaseConfig::default()
    };
    let store = RegistryStore::connect(&cfg)
        .await
        .expect("failed to open temp database");
    TempDb { path, store }
}

pub fn vehicle(vehicle_id: i64, owner_id: i64) -> Vehicle {
    Vehicle {
        vehicle_id,
        vehicle_type: "car".to_string(),
        vehicle_number: format!("AB{vehicle_id:03}"),
        owner_id,
    }
}

pub async fn transfer_count(store: &RegistryStore) -> i64 {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Ownership_Transfer")
        .fetch_one(store.pool())
        .await
        .expect("count transfers");
    n
}
