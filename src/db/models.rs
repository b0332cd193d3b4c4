use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Owner {
    #[serde(rename = "Owner_ID")]
    #[sqlx(rename = "Owner_ID")]
    pub owner_id: i64,
    #[serde(rename = "Owner_Name")]
    #[sqlx(rename = "Owner_Name")]
    pub owner_name: String,
    #[serde(rename = "Contact_Number")]
    #[sqlx(rename = "Contact_Number")]
    pub contact_number: String,
    #[serde(rename = "Address")]
    #[sqlx(rename = "Address")]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Vehicle {
    #[serde(rename = "Vehicle_ID")]
    #[sqlx(rename = "Vehicle_ID")]
    pub vehicle_id: i64,
    #[serde(rename = "Vehicle_Type")]
    #[sqlx(rename = "Vehicle_Type")]
    pub vehicle_type: String,
    #[serde(rename = "Vehicle_Number")]
    #[sqlx(rename = "Vehicle_Number")]
    pub vehicle_number: String,
    #[serde(rename = "Owner_ID")]
    #[sqlx(rename = "Owner_ID")]
    pub owner_id: i64,
}

/// One audit-log entry. `transfer_date` is stamped by the database clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnershipTransfer {
    #[serde(rename = "Transfer_ID")]
    pub transfer_id: i64,
    #[serde(rename = "Vehicle_ID")]
    pub vehicle_id: i64,
    #[serde(rename = "Old_Owner_ID")]
    pub old_owner_id: i64,
    #[serde(rename = "New_Owner_ID")]
    pub new_owner_id: i64,
    #[serde(rename = "Transfer_Date")]
    pub transfer_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct VehicleInsurance {
    #[serde(rename = "Insurance_ID")]
    #[sqlx(rename = "Insurance_ID")]
    pub insurance_id: i64,
    #[serde(rename = "Vehicle_ID")]
    #[sqlx(rename = "Vehicle_ID")]
    pub vehicle_id: i64,
    #[serde(rename = "Policy_Number")]
    #[sqlx(rename = "Policy_Number")]
    pub policy_number: String,
    #[serde(rename = "Start_Date")]
    #[sqlx(rename = "Start_Date")]
    pub start_date: NaiveDate,
    #[serde(rename = "End_Date")]
    #[sqlx(rename = "End_Date")]
    pub end_date: NaiveDate,
    #[serde(rename = "Premium_Amount")]
    #[sqlx(rename = "Premium_Amount")]
    pub premium_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct VehicleTax {
    #[serde(rename = "Tax_ID")]
    #[sqlx(rename = "Tax_ID")]
    pub tax_id: i64,
    #[serde(rename = "Vehicle_ID")]
    #[sqlx(rename = "Vehicle_ID")]
    pub vehicle_id: i64,
    #[serde(rename = "Tax_Type")]
    #[sqlx(rename = "Tax_Type")]
    pub tax_type: String,
    #[serde(rename = "Amount")]
    #[sqlx(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Payment_Date")]
    #[sqlx(rename = "Payment_Date")]
    pub payment_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct VehicleInspection {
    #[serde(rename = "Inspection_ID")]
    #[sqlx(rename = "Inspection_ID")]
    pub inspection_id: i64,
    #[serde(rename = "Vehicle_ID")]
    #[sqlx(rename = "Vehicle_ID")]
    pub vehicle_id: i64,
    #[serde(rename = "Inspection_Date")]
    #[sqlx(rename = "Inspection_Date")]
    pub inspection_date: NaiveDate,
    #[serde(rename = "Inspection_Result")]
    #[sqlx(rename = "Inspection_Result")]
    pub inspection_result: String,
}
