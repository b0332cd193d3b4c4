use crate::config::DatabaseConfig;
use crate::db::models::{
    Owner, OwnershipTransfer, Vehicle, VehicleInspection, VehicleInsurance, VehicleTax,
};
use crate::db::schema::SQLITE_INIT;
use crate::error::{RegistryError, Resource};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

pub(crate) const TRANSFER_COLUMNS: &str =
    "Transfer_ID, Vehicle_ID, Old_Owner_ID, New_Owner_ID, Transfer_Date";

#[derive(Clone)]
pub struct RegistryStore {
    pool: SqlitePool,
}

impl RegistryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database behind `cfg.url` and bootstrap the schema.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, RegistryError> {
        let connect_opts = SqliteConnectOptions::from_str(cfg.url.as_str())?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(cfg.busy_timeout());
        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(cfg.acquire_timeout())
            .connect_with(connect_opts)
            .await?;
        info!(
            url = %cfg.url,
            max_connections = cfg.max_connections,
            "database pool ready"
        );

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RegistryError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle, RegistryError> {
        sqlx::query_as::<_, Vehicle>(
            "SELECT Vehicle_ID, Vehicle_Type, Vehicle_Number, Owner_ID FROM Vehicle WHERE Vehicle_ID = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RegistryError::not_found(Resource::Vehicle, id))
    }

    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, RegistryError> {
        let rows = sqlx::query_as::<_, Vehicle>(
            "SELECT Vehicle_ID, Vehicle_Type, Vehicle_Number, Owner_ID FROM Vehicle ORDER BY Vehicle_ID",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_owner(&self, id: i64) -> Result<Owner, RegistryError> {
        sqlx::query_as::<_, Owner>(
            "SELECT Owner_ID, Owner_Name, Contact_Number, Address FROM Owner WHERE Owner_ID = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RegistryError::not_found(Resource::Owner, id))
    }

    pub async fn get_transfer(&self, id: i64) -> Result<OwnershipTransfer, RegistryError> {
        let row = sqlx::query(&format!(
            "SELECT {TRANSFER_COLUMNS} FROM Ownership_Transfer WHERE Transfer_ID = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RegistryError::not_found(Resource::OwnershipTransfer, id))?;
        Self::row_to_transfer(row)
    }

    /// Transfers for one vehicle, oldest first. Audit helper; no route serves it.
    pub async fn list_transfers_for_vehicle(
        &self,
        vehicle_id: i64,
    ) -> Result<Vec<OwnershipTransfer>, RegistryError> {
        let rows = sqlx::query(&format!(
            "SELECT {TRANSFER_COLUMNS} FROM Ownership_Transfer WHERE Vehicle_ID = ? ORDER BY Transfer_ID"
        ))
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_transfer).collect()
    }

    pub async fn get_insurance(&self, id: i64) -> Result<VehicleInsurance, RegistryError> {
        sqlx::query_as::<_, VehicleInsurance>(
            r#"SELECT Insurance_ID, Vehicle_ID, Policy_Number, Start_Date, End_Date, Premium_Amount
               FROM Vehicle_Insurance WHERE Insurance_ID = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RegistryError::not_found(Resource::VehicleInsurance, id))
    }

    pub async fn get_tax(&self, id: i64) -> Result<VehicleTax, RegistryError> {
        sqlx::query_as::<_, VehicleTax>(
            r#"SELECT Tax_ID, Vehicle_ID, Tax_Type, Amount, Payment_Date
               FROM Vehicle_Tax WHERE Tax_ID = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RegistryError::not_found(Resource::VehicleTax, id))
    }

    pub async fn get_inspection(&self, id: i64) -> Result<VehicleInspection, RegistryError> {
        sqlx::query_as::<_, VehicleInspection>(
            r#"SELECT Inspection_ID, Vehicle_ID, Inspection_Date, Inspection_Result
               FROM Vehicle_Inspection WHERE Inspection_ID = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RegistryError::not_found(Resource::VehicleInspection, id))
    }

    /// Plain insert; a duplicate `Owner_ID` surfaces as the database's constraint error.
    pub async fn insert_owner(&self, owner: &Owner) -> Result<(), RegistryError> {
        sqlx::query(
            r#"
            INSERT INTO Owner (Owner_ID, Owner_Name, Contact_Number, Address)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(owner.owner_id)
        .bind(&owner.owner_name)
        .bind(&owner.contact_number)
        .bind(&owner.address)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_vehicle(&self, vehicle: &Vehicle) -> Result<(), RegistryError> {
        sqlx::query(
            r#"
            INSERT INTO Vehicle (Vehicle_ID, Vehicle_Type, Vehicle_Number, Owner_ID)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(vehicle.vehicle_id)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.vehicle_number)
        .bind(vehicle.owner_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_insurance(&self, insurance: &VehicleInsurance) -> Result<(), RegistryError> {
        sqlx::query(
            r#"
            INSERT INTO Vehicle_Insurance (
                Insurance_ID, Vehicle_ID, Policy_Number, Start_Date, End_Date, Premium_Amount
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(insurance.insurance_id)
        .bind(insurance.vehicle_id)
        .bind(&insurance.policy_number)
        .bind(insurance.start_date)
        .bind(insurance.end_date)
        .bind(insurance.premium_amount)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_tax(&self, tax: &VehicleTax) -> Result<(), RegistryError> {
        sqlx::query(
            r#"
            INSERT INTO Vehicle_Tax (Tax_ID, Vehicle_ID, Tax_Type, Amount, Payment_Date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(tax.tax_id)
        .bind(tax.vehicle_id)
        .bind(&tax.tax_type)
        .bind(tax.amount)
        .bind(tax.payment_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_inspection(
        &self,
        inspection: &VehicleInspection,
    ) -> Result<(), RegistryError> {
        sqlx::query(
            r#"
            INSERT INTO Vehicle_Inspection (
                Inspection_ID, Vehicle_ID, Inspection_Date, Inspection_Result
            ) VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(inspection.inspection_id)
        .bind(inspection.vehicle_id)
        .bind(inspection.inspection_date)
        .bind(&inspection.inspection_result)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub(crate) fn row_to_transfer(row: SqliteRow) -> Result<OwnershipTransfer, RegistryError> {
        let transfer_id: i64 = row.try_get("Transfer_ID")?;
        let vehicle_id: i64 = row.try_get("Vehicle_ID")?;
        let old_owner_id: i64 = row.try_get("Old_Owner_ID")?;
        let new_owner_id: i64 = row.try_get("New_Owner_ID")?;
        let date_str: String = row.try_get("Transfer_Date")?;

        let transfer_date: DateTime<Utc> = DateTime::parse_from_rfc3339(&date_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(OwnershipTransfer {
            transfer_id,
            vehicle_id,
            old_owner_id,
            new_owner_id,
            transfer_date,
        })
    }
}
