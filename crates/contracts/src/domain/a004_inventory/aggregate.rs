use crate::domain::a001_device::aggregate::FullDevice;
use crate::domain::common::{FullView, Record};
use crate::enums::DeviceCondition;
use serde::{Deserialize, Serialize};

/// Инвентаризация: зафиксированное состояние устройства на дату проверки
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: String,
    pub check_date: String,
    pub condition: DeviceCondition,
    pub device_id: String,
}

impl Record for Inventory {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã kiểm kê", &self.id),
            ("Ngày kiểm kê", &self.check_date),
            ("Thiết bị", &self.device_id),
        ]
    }

    fn date_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Ngày kiểm kê", &self.check_date)]
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "inventories"
    }

    fn element_name() -> &'static str {
        "Kiểm kê"
    }

    fn list_name() -> &'static str {
        "Kiểm kê thiết bị"
    }

    fn id_prefix() -> &'static str {
        "I"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullInventory {
    #[serde(flatten)]
    pub inventory: Inventory,
    pub device: Option<FullDevice>,
}

impl FullView for FullInventory {
    type Flat = Inventory;

    fn flat(&self) -> &Inventory {
        &self.inventory
    }
}
