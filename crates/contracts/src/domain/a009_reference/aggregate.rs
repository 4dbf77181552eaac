use crate::domain::common::Record;
use serde::{Deserialize, Serialize};

// ============================================================================
// Простые справочники { id, name }
// ============================================================================

macro_rules! named_reference {
    ($(#[$doc:meta])* $name:ident, $index:literal, $collection:literal, $element:literal, $list:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            pub id: String,
            pub name: String,
        }

        impl Record for $name {
            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn required_fields(&self) -> Vec<(&'static str, &str)> {
                vec![("Mã", &self.id), ("Tên", &self.name)]
            }

            fn aggregate_index() -> &'static str {
                $index
            }

            fn collection_name() -> &'static str {
                $collection
            }

            fn element_name() -> &'static str {
                $element
            }

            fn list_name() -> &'static str {
                $list
            }

            fn id_prefix() -> &'static str {
                ""
            }
        }
    };
}

named_reference!(
    /// Тип устройства (компьютер, принтер, ...)
    DeviceType, "a009", "device_types", "Loại thiết bị", "Loại thiết bị"
);
named_reference!(
    /// Размещение устройства (кабинет)
    DeviceLocation, "a009", "device_locations", "Vị trí", "Vị trí"
);
named_reference!(
    /// Эксплуатационный статус устройства
    DeviceStatus, "a009", "device_statuses", "Trạng thái", "Trạng thái"
);
named_reference!(Department, "a009", "departments", "Phòng ban", "Phòng ban");
named_reference!(Position, "a009", "positions", "Chức vụ", "Chức vụ");
named_reference!(
    /// Вид договора на обслуживание
    ContractType, "a009", "contract_types", "Loại hợp đồng", "Loại hợp đồng"
);

// ============================================================================
// Поставщик
// ============================================================================

/// Поставщик / сервисная организация
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
}

impl Record for Supplier {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Mã", &self.id), ("Tên nhà cung cấp", &self.name)]
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Nhà cung cấp"
    }

    fn list_name() -> &'static str {
        "Nhà cung cấp"
    }

    fn id_prefix() -> &'static str {
        ""
    }
}
