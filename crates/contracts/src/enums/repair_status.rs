use serde::{Deserialize, Serialize};

/// Статус ремонта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RepairStatus {
    #[serde(rename = "đã sửa chữa")]
    Done,
    #[default]
    #[serde(rename = "chưa sửa chữa")]
    Pending,
}

impl RepairStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            RepairStatus::Done => "đã sửa chữa",
            RepairStatus::Pending => "chưa sửa chữa",
        }
    }

    pub fn all() -> Vec<RepairStatus> {
        vec![RepairStatus::Done, RepairStatus::Pending]
    }

    pub fn from_display(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.display_name() == value)
    }
}
