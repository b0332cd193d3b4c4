//! Request bodies for the POST routes.
//!
//! Every field is optional on the wire so that an absent field is reported
//! as a missing field (400) instead of a generic decode failure. `validate`
//! turns a payload into a fully-populated row or lists what is missing.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::db::models::{Owner, Vehicle, VehicleInspection, VehicleInsurance, VehicleTax};
use crate::error::RegistryError;

/// Collects the names of absent fields while unpacking a payload.
#[derive(Default)]
struct Presence {
    missing: Vec<&'static str>,
}

impl Presence {
    fn value<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    /// Blank text counts as absent.
    fn text(&mut self, name: &'static str, value: Option<String>) -> Option<String> {
        self.value(name, value.filter(|s| !s.trim().is_empty()))
    }

    fn into_error(self) -> RegistryError {
        RegistryError::MissingFields(self.missing)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OwnerPayload {
    #[serde(rename = "Owner_ID")]
    pub owner_id: Option<i64>,
    #[serde(rename = "Owner_Name")]
    pub owner_name: Option<String>,
    #[serde(rename = "Contact_Number")]
    pub contact_number: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
}

impl OwnerPayload {
    pub fn validate(self) -> Result<Owner, RegistryError> {
        let mut p = Presence::default();
        let fields = (
            p.value("Owner_ID", self.owner_id),
            p.text("Owner_Name", self.owner_name),
            p.text("Contact_Number", self.contact_number),
            p.text("Address", self.address),
        );
        match fields {
            (Some(owner_id), Some(owner_name), Some(contact_number), Some(address)) => Ok(Owner {
                owner_id,
                owner_name,
                contact_number,
                address,
            }),
            _ => Err(p.into_error()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VehiclePayload {
    #[serde(rename = "Vehicle_ID")]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "Vehicle_Type")]
    pub vehicle_type: Option<String>,
    #[serde(rename = "Vehicle_Number")]
    pub vehicle_number: Option<String>,
    #[serde(rename = "Owner_ID")]
    pub owner_id: Option<i64>,
}

impl VehiclePayload {
    pub fn validate(self) -> Result<Vehicle, RegistryError> {
        let mut p = Presence::default();
        let fields = (
            p.value("Vehicle_ID", self.vehicle_id),
            p.text("Vehicle_Type", self.vehicle_type),
            p.text("Vehicle_Number", self.vehicle_number),
            p.value("Owner_ID", self.owner_id),
        );
        match fields {
            (Some(vehicle_id), Some(vehicle_type), Some(vehicle_number), Some(owner_id)) => {
                Ok(Vehicle {
                    vehicle_id,
                    vehicle_type,
                    vehicle_number,
                    owner_id,
                })
            }
            _ => Err(p.into_error()),
        }
    }
}

/// A validated transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    pub vehicle_id: i64,
    pub new_owner_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransferPayload {
    #[serde(rename = "Vehicle_ID")]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "New_Owner_ID")]
    pub new_owner_id: Option<i64>,
}

impl TransferPayload {
    pub fn validate(self) -> Result<TransferRequest, RegistryError> {
        let mut p = Presence::default();
        let fields = (
            p.value("Vehicle_ID", self.vehicle_id),
            p.value("New_Owner_ID", self.new_owner_id),
        );
        match fields {
            (Some(vehicle_id), Some(new_owner_id)) => Ok(TransferRequest {
                vehicle_id,
                new_owner_id,
            }),
            _ => Err(p.into_error()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InsurancePayload {
    #[serde(rename = "Insurance_ID")]
    pub insurance_id: Option<i64>,
    #[serde(rename = "Vehicle_ID")]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "Policy_Number")]
    pub policy_number: Option<String>,
    #[serde(rename = "Start_Date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "End_Date")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "Premium_Amount")]
    pub premium_amount: Option<f64>,
}

impl InsurancePayload {
    pub fn validate(self) -> Result<VehicleInsurance, RegistryError> {
        let mut p = Presence::default();
        let fields = (
            p.value("Insurance_ID", self.insurance_id),
            p.value("Vehicle_ID", self.vehicle_id),
            p.text("Policy_Number", self.policy_number),
            p.value("Start_Date", self.start_date),
            p.value("End_Date", self.end_date),
            p.value("Premium_Amount", self.premium_amount),
        );
        match fields {
            (
                Some(insurance_id),
                Some(vehicle_id),
                Some(policy_number),
                Some(start_date),
                Some(end_date),
                Some(premium_amount),
            ) => Ok(VehicleInsurance {
                insurance_id,
                vehicle_id,
                policy_number,
                start_date,
                end_date,
                premium_amount,
            }),
            _ => Err(p.into_error()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TaxPayload {
    #[serde(rename = "Tax_ID")]
    pub tax_id: Option<i64>,
    #[serde(rename = "Vehicle_ID")]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "Tax_Type")]
    pub tax_type: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<f64>,
    #[serde(rename = "Payment_Date")]
    pub payment_date: Option<NaiveDate>,
}

impl TaxPayload {
    pub fn validate(self) -> Result<VehicleTax, RegistryError> {
        let mut p = Presence::default();
        let fields = (
            p.value("Tax_ID", self.tax_id),
            p.value("Vehicle_ID", self.vehicle_id),
            p.text("Tax_Type", self.tax_type),
            p.value("Amount", self.amount),
            p.value("Payment_Date", self.payment_date),
        );
        match fields {
            (Some(tax_id), Some(vehicle_id), Some(tax_type), Some(amount), Some(payment_date)) => {
                Ok(VehicleTax {
                    tax_id,
                    vehicle_id,
                    tax_type,
                    amount,
                    payment_date,
                })
            }
            _ => Err(p.into_error()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InspectionPayload {
    #[serde(rename = "Inspection_ID")]
    pub inspection_id: Option<i64>,
    #[serde(rename = "Vehicle_ID")]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "Inspection_Date")]
    pub inspection_date: Option<NaiveDate>,
    #[serde(rename = "Inspection_Result")]
    pub inspection_result: Option<String>,
}

impl InspectionPayload {
    pub fn validate(self) -> Result<VehicleInspection, RegistryError> {
        let mut p = Presence::default();
        let fields = (
            p.value("Inspection_ID", self.inspection_id),
            p.value("Vehicle_ID", self.vehicle_id),
            p.value("Inspection_Date", self.inspection_date),
            p.text("Inspection_Result", self.inspection_result),
        );
        match fields {
            (Some(inspection_id), Some(vehicle_id), Some(inspection_date), Some(inspection_result)) => {
                Ok(VehicleInspection {
                    inspection_id,
                    vehicle_id,
                    inspection_date,
                    inspection_result,
                })
            }
            _ => Err(p.into_error()),
        }
    }
}
