use crate::domain::a001_device::aggregate::FullDevice;
use crate::domain::a002_employee::aggregate::FullEmployee;
use crate::domain::a009_reference::aggregate::ContractType;
use crate::domain::common::{FullView, Record};
use serde::{Deserialize, Serialize};

/// Запись журнала ремонтов
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairHistory {
    pub id: String,
    pub notes: String,
    pub contract_type_id: String,
    pub employee_id: String,
    pub device_id: String,
}

impl Record for RepairHistory {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã lịch sử", &self.id),
            ("Ghi chú", &self.notes),
            ("Thiết bị", &self.device_id),
            ("Người thực hiện", &self.employee_id),
        ]
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "repair_histories"
    }

    fn element_name() -> &'static str {
        "Lịch sử sửa chữa"
    }

    fn list_name() -> &'static str {
        "Lịch sử sửa chữa"
    }

    fn id_prefix() -> &'static str {
        "RH"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullRepairHistory {
    #[serde(flatten)]
    pub history: RepairHistory,
    pub contract_type: Option<ContractType>,
    pub employee: Option<FullEmployee>,
    pub device: Option<FullDevice>,
}

impl FullView for FullRepairHistory {
    type Flat = RepairHistory;

    fn flat(&self) -> &RepairHistory {
        &self.history
    }
}
