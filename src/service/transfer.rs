//! Ownership transfer: one audit row plus one owner update, committed together.

use crate::db::models::OwnershipTransfer;
use crate::db::sqlite::{RegistryStore, SqlitePool, TRANSFER_COLUMNS};
use crate::error::{RegistryError, Resource};
use sqlx::{Sqlite, Transaction};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone)]
pub struct TransferCoordinator {
    pool: SqlitePool,
    deadline: Duration,
}

impl TransferCoordinator {
    pub fn new(pool: SqlitePool, deadline: Duration) -> Self {
        Self { pool, deadline }
    }

    /// Move `vehicle_id` to `new_owner_id`, recording the previous owner.
    ///
    /// Either both the `Ownership_Transfer` row and the `Vehicle.Owner_ID`
    /// update are committed, or neither is. Nothing is retried; on the
    /// deadline the in-flight transaction is dropped and rolled back.
    pub async fn transfer(
        &self,
        vehicle_id: i64,
        new_owner_id: i64,
    ) -> Result<OwnershipTransfer, RegistryError> {
        match tokio::time::timeout(self.deadline, self.run(vehicle_id, new_owner_id)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(vehicle_id, new_owner_id, deadline = ?self.deadline, "transfer abandoned");
                Err(RegistryError::Timeout(self.deadline))
            }
        }
    }

    async fn run(
        &self,
        vehicle_id: i64,
        new_owner_id: i64,
    ) -> Result<OwnershipTransfer, RegistryError> {
        let mut tx = self.pool.begin().await?;

        match Self::apply(&mut tx, vehicle_id, new_owner_id).await {
            Ok(record) => {
                tx.commit().await?;
                info!(
                    transfer_id = record.transfer_id,
                    vehicle_id,
                    old_owner_id = record.old_owner_id,
                    new_owner_id,
                    "ownership transferred"
                );
                Ok(record)
            }
            Err(e) => {
                if let Err(rb) = tx.rollback().await {
                    warn!(vehicle_id, error = %rb, "transfer rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn apply(
        tx: &mut Transaction<'_, Sqlite>,
        vehicle_id: i64,
        new_owner_id: i64,
    ) -> Result<OwnershipTransfer, RegistryError> {
        // The current owner is read by the insert itself, so the first statement
        // of the transaction is a write and the write lock is held before the
        // owner is observed. Concurrent transfers on one vehicle serialize here.
        let inserted = sqlx::query(&format!(
            r#"
            INSERT INTO Ownership_Transfer (Vehicle_ID, Old_Owner_ID, New_Owner_ID, Transfer_Date)
            SELECT Vehicle_ID, Owner_ID, ?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            FROM Vehicle WHERE Vehicle_ID = ?
            RETURNING {TRANSFER_COLUMNS}
            "#
        ))
        .bind(new_owner_id)
        .bind(vehicle_id)
        .fetch_optional(&mut **tx)
        .await?;

        let Some(row) = inserted else {
            return Err(RegistryError::not_found(Resource::Vehicle, vehicle_id));
        };
        let record = RegistryStore::row_to_transfer(row)?;

        let updated = sqlx::query("UPDATE Vehicle SET Owner_ID = ? WHERE Vehicle_ID = ?")
            .bind(new_owner_id)
            .bind(vehicle_id)
            .execute(&mut **tx)
            .await?;
        if updated.rows_affected() != 1 {
            return Err(RegistryError::not_found(Resource::Vehicle, vehicle_id));
        }

        Ok(record)
    }
}
