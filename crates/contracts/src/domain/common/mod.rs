//! Common types and traits for all records

pub mod dates;
pub mod record;

// Re-exports
pub use dates::parse_iso_date;
pub use record::{FullView, Record};
