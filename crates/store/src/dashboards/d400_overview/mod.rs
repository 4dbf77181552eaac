pub mod service;

pub use service::{DashboardSummary, UrgentItem};
