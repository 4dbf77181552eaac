use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a003_maintenance::aggregate::Maintenance;
use contracts::domain::a004_inventory::aggregate::Inventory;
use contracts::domain::a005_repair::aggregate::Repair;
use contracts::domain::a006_invoice::aggregate::{Invoice, InvoiceDetail};
use contracts::domain::a007_warranty::aggregate::Warranty;
use contracts::domain::a008_repair_history::aggregate::RepairHistory;
use contracts::domain::a009_reference::aggregate::{
    ContractType, Department, DeviceLocation, DeviceStatus, DeviceType, Position, Supplier,
};
use serde::{Deserialize, Serialize};

/// Снимок всех плоских списков: формат встроенных данных и вход проекций
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tables {
    pub device_types: Vec<DeviceType>,
    pub device_locations: Vec<DeviceLocation>,
    pub device_statuses: Vec<DeviceStatus>,
    pub departments: Vec<Department>,
    pub positions: Vec<Position>,
    pub suppliers: Vec<Supplier>,
    pub contract_types: Vec<ContractType>,
    pub employees: Vec<Employee>,
    pub devices: Vec<Device>,
    pub maintenances: Vec<Maintenance>,
    pub inventories: Vec<Inventory>,
    pub repairs: Vec<Repair>,
    pub invoices: Vec<Invoice>,
    pub invoice_details: Vec<InvoiceDetail>,
    pub warranties: Vec<Warranty>,
    pub repair_histories: Vec<RepairHistory>,
}
