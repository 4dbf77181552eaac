use serde::{Deserialize, Serialize};

/// Статус планового обслуживания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    #[serde(rename = "đã bảo trì")]
    Done,
    #[default]
    #[serde(rename = "chưa bảo trì")]
    Pending,
}

impl MaintenanceStatus {
    /// Отображаемое значение (совпадает с сериализованным)
    pub fn display_name(&self) -> &'static str {
        match self {
            MaintenanceStatus::Done => "đã bảo trì",
            MaintenanceStatus::Pending => "chưa bảo trì",
        }
    }

    pub fn all() -> Vec<MaintenanceStatus> {
        vec![MaintenanceStatus::Done, MaintenanceStatus::Pending]
    }

    /// Парсинг из отображаемой строки
    pub fn from_display(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.display_name() == value)
    }
}
