pub mod a001_device;
pub mod a002_employee;
pub mod a003_maintenance;
pub mod a004_inventory;
pub mod a005_repair;
pub mod a006_invoice;
pub mod a007_warranty;
pub mod a008_repair_history;
pub mod a009_reference;
pub mod common;
