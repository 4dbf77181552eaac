use crate::domain::a001_device::aggregate::FullDevice;
use crate::domain::common::{FullView, Record};
use crate::enums::MaintenanceStatus;
use serde::{Deserialize, Serialize};

/// Плановое обслуживание устройства
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub id: String,
    pub date: String,
    /// Периодичность в свободной форме ("3 tháng")
    pub frequency: String,
    pub content: String,
    pub status: MaintenanceStatus,
    pub device_id: String,
}

impl Record for Maintenance {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã bảo trì", &self.id),
            ("Ngày bảo trì", &self.date),
            ("Thiết bị", &self.device_id),
        ]
    }

    fn date_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Ngày bảo trì", &self.date)]
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "maintenances"
    }

    fn element_name() -> &'static str {
        "Bảo trì"
    }

    fn list_name() -> &'static str {
        "Quản lý bảo trì"
    }

    fn id_prefix() -> &'static str {
        "M"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullMaintenance {
    #[serde(flatten)]
    pub maintenance: Maintenance,
    pub device: Option<FullDevice>,
}

impl FullView for FullMaintenance {
    type Flat = Maintenance;

    fn flat(&self) -> &Maintenance {
        &self.maintenance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserializes_from_display_string() {
        let json = r#"{ "id": "M003", "date": "2023-08-10", "frequency": "12 tháng",
            "content": "Bảo trì hệ thống scan", "status": "chưa bảo trì", "deviceId": "D003" }"#;
        let item: Maintenance = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, MaintenanceStatus::Pending);
        assert_eq!(item.device_id, "D003");
    }
}
