//! SQL DDL for initializing the registry tables.
//! SQLite-first design; column names follow the public JSON field names.

/// SQLite schema with:
/// - every `*_ID` an INTEGER primary key supplied by the caller, except
/// - `Ownership_Transfer.Transfer_ID`, drawn from the AUTOINCREMENT sequence
///   so ids are monotonic and never reused
/// - dates stored as ISO-8601 TEXT, amounts as REAL
/// - no foreign keys: referenced owners and vehicles need not exist
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Owner (
    Owner_ID INTEGER PRIMARY KEY,
    Owner_Name TEXT NOT NULL,
    Contact_Number TEXT NOT NULL,
    Address TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Vehicle (
    Vehicle_ID INTEGER PRIMARY KEY,
    Vehicle_Type TEXT NOT NULL,
    Vehicle_Number TEXT NOT NULL,
    Owner_ID INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS Ownership_Transfer (
    Transfer_ID INTEGER PRIMARY KEY AUTOINCREMENT,
    Vehicle_ID INTEGER NOT NULL,
    Old_Owner_ID INTEGER NOT NULL,
    New_Owner_ID INTEGER NOT NULL,
    Transfer_Date TEXT NOT NULL -- RFC3339, UTC
);

CREATE INDEX IF NOT EXISTS idx_ownership_transfer_vehicle ON Ownership_Transfer(Vehicle_ID);

CREATE TABLE IF NOT EXISTS Vehicle_Insurance (
    Insurance_ID INTEGER PRIMARY KEY,
    Vehicle_ID INTEGER NOT NULL,
    Policy_Number TEXT NOT NULL,
    Start_Date TEXT NOT NULL,
    End_Date TEXT NOT NULL,
    Premium_Amount REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS Vehicle_Tax (
    Tax_ID INTEGER PRIMARY KEY,
    Vehicle_ID INTEGER NOT NULL,
    Tax_Type TEXT NOT NULL,
    Amount REAL NOT NULL,
    Payment_Date TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Vehicle_Inspection (
    Inspection_ID INTEGER PRIMARY KEY,
    Vehicle_ID INTEGER NOT NULL,
    Inspection_Date TEXT NOT NULL,
    Inspection_Result TEXT NOT NULL
);
"#;
