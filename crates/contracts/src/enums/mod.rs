pub mod device_condition;
pub mod maintenance_status;
pub mod repair_status;

pub use device_condition::DeviceCondition;
pub use maintenance_status::MaintenanceStatus;
pub use repair_status::RepairStatus;
