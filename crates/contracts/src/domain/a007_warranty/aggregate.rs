use crate::domain::a001_device::aggregate::FullDevice;
use crate::domain::a009_reference::aggregate::Supplier;
use crate::domain::common::{parse_iso_date, FullView, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Гарантия поставщика на устройство
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub conditions: String,
    pub device_id: String,
    pub supplier_id: String,
}

impl Warranty {
    /// Истекла ли гарантия на указанную дату.
    /// Нераспознанная дата окончания считается неистёкшей.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        parse_iso_date(&self.end_date).is_some_and(|end| end < today)
    }
}

impl Record for Warranty {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã bảo hành", &self.id),
            ("Ngày bắt đầu", &self.start_date),
            ("Ngày kết thúc", &self.end_date),
            ("Thiết bị", &self.device_id),
            ("Nhà cung cấp", &self.supplier_id),
        ]
    }

    fn date_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Ngày bắt đầu", &self.start_date),
            ("Ngày kết thúc", &self.end_date),
        ]
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "warranties"
    }

    fn element_name() -> &'static str {
        "Bảo hành"
    }

    fn list_name() -> &'static str {
        "Quản lý bảo hành"
    }

    fn id_prefix() -> &'static str {
        "W"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullWarranty {
    #[serde(flatten)]
    pub warranty: Warranty,
    pub device: Option<FullDevice>,
    pub supplier: Option<Supplier>,
}

impl FullView for FullWarranty {
    type Flat = Warranty;

    fn flat(&self) -> &Warranty {
        &self.warranty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired() {
        let warranty = Warranty {
            end_date: "2024-01-15".into(),
            ..Default::default()
        };
        let day = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert!(warranty.is_expired(day("2024-01-16")));
        assert!(!warranty.is_expired(day("2024-01-15")));

        let broken = Warranty {
            end_date: "15/01/2024".into(),
            ..Default::default()
        };
        assert!(!broken.is_expired(day("2030-01-01")));
    }
}
