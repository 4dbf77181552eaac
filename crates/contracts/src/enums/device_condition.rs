use serde::{Deserialize, Serialize};

/// Состояние устройства по результатам инвентаризации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceCondition {
    #[default]
    #[serde(rename = "tốt")]
    Good,
    #[serde(rename = "hỏng")]
    Broken,
    #[serde(rename = "bảo trì")]
    Maintenance,
    #[serde(rename = "sửa chữa")]
    Repair,
}

impl DeviceCondition {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceCondition::Good => "tốt",
            DeviceCondition::Broken => "hỏng",
            DeviceCondition::Maintenance => "bảo trì",
            DeviceCondition::Repair => "sửa chữa",
        }
    }

    pub fn all() -> Vec<DeviceCondition> {
        vec![
            DeviceCondition::Good,
            DeviceCondition::Broken,
            DeviceCondition::Maintenance,
            DeviceCondition::Repair,
        ]
    }

    pub fn from_display(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.display_name() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_display() {
        for condition in DeviceCondition::all() {
            let json = serde_json::to_string(&condition).unwrap();
            assert_eq!(json, format!("\"{}\"", condition.display_name()));
        }
        let parsed: DeviceCondition = serde_json::from_str("\"sửa chữa\"").unwrap();
        assert_eq!(parsed, DeviceCondition::Repair);
    }
}
