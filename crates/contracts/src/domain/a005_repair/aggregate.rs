use crate::domain::a001_device::aggregate::FullDevice;
use crate::domain::a002_employee::aggregate::FullEmployee;
use crate::domain::a009_reference::aggregate::{ContractType, Supplier};
use crate::domain::common::{FullView, Record};
use crate::enums::RepairStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Ремонт устройства
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repair {
    pub id: String,
    pub repair_date: String,
    pub notes: String,
    pub status: RepairStatus,
    /// Стоимость, VND
    pub cost: f64,
    pub contract_type_id: String,
    pub device_id: String,
    /// Ответственный за ремонт
    pub employee_id: String,
    pub supplier_id: String,
}

impl Record for Repair {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã sửa chữa", &self.id),
            ("Ngày sửa chữa", &self.repair_date),
            ("Thiết bị", &self.device_id),
            ("Người phụ trách", &self.employee_id),
        ]
    }

    fn date_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Ngày sửa chữa", &self.repair_date)]
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "repairs"
    }

    fn element_name() -> &'static str {
        "Sửa chữa"
    }

    fn list_name() -> &'static str {
        "Quản lý sửa chữa"
    }

    fn id_prefix() -> &'static str {
        "R"
    }
}

// ============================================================================
// Denormalized view
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullRepair {
    #[serde(flatten)]
    pub repair: Repair,
    pub contract_type: Option<ContractType>,
    pub device: Option<FullDevice>,
    pub employee: Option<FullEmployee>,
    pub supplier: Option<Supplier>,
}

impl FullView for FullRepair {
    type Flat = Repair;

    fn flat(&self) -> &Repair {
        &self.repair
    }
}
