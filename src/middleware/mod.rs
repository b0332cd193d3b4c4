pub mod payload;

pub use payload::{JsonPayload, parse_id};
