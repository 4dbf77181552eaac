use crate::domain::a002_employee::aggregate::Employee;
use crate::domain::a009_reference::aggregate::{DeviceLocation, DeviceStatus, DeviceType};
use crate::domain::common::{FullView, Record};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Устройство (единица офисного оборудования)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    /// Балансовая стоимость, VND
    pub value: f64,
    pub purchase_date: String,
    pub device_type_id: String,
    pub device_location_id: String,
    pub device_status_id: String,
    /// Ответственный сотрудник
    pub employee_id: String,
}

impl Record for Device {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã thiết bị", &self.id),
            ("Tên thiết bị", &self.name),
            ("Loại thiết bị", &self.device_type_id),
            ("Vị trí", &self.device_location_id),
            ("Trạng thái", &self.device_status_id),
            ("Người quản lý", &self.employee_id),
            ("Ngày mua", &self.purchase_date),
        ]
    }

    fn date_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Ngày mua", &self.purchase_date)]
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "devices"
    }

    fn element_name() -> &'static str {
        "Thiết bị"
    }

    fn list_name() -> &'static str {
        "Danh sách thiết bị"
    }

    fn id_prefix() -> &'static str {
        "D"
    }
}

// ============================================================================
// Denormalized view
// ============================================================================

/// Устройство с развёрнутыми ссылками на справочники и сотрудника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullDevice {
    #[serde(flatten)]
    pub device: Device,
    pub device_type: Option<DeviceType>,
    pub device_location: Option<DeviceLocation>,
    pub device_status: Option<DeviceStatus>,
    pub employee: Option<Employee>,
}

impl FullDevice {
    /// Наименование для ссылок из зависимых документов
    pub fn display_name(&self) -> &str {
        &self.device.name
    }
}

impl FullView for FullDevice {
    type Flat = Device;

    fn flat(&self) -> &Device {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = r#"{ "id": "D001", "name": "Máy tính văn phòng 01", "value": 15000000,
            "purchaseDate": "2023-01-15", "deviceTypeId": "1", "deviceLocationId": "1",
            "deviceStatusId": "1", "employeeId": "E001" }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.device_type_id, "1");
        assert_eq!(device.value, 15_000_000.0);
        assert!(device.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_reports_blank_labels() {
        let device = Device {
            id: "D010".into(),
            name: "   ".into(),
            ..Default::default()
        };
        let missing = device.missing_fields();
        assert!(missing.contains(&"Tên thiết bị"));
        assert!(missing.contains(&"Ngày mua"));
        assert!(!missing.contains(&"Mã thiết bị"));
    }
}
