pub mod records;
pub mod transfer;
