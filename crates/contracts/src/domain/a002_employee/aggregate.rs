use crate::domain::a009_reference::aggregate::{Department, Position};
use crate::domain::common::{FullView, Record};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Сотрудник (владелец устройств, исполнитель ремонтов)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub position_id: String,
    pub department_id: String,
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã nhân viên", &self.id),
            ("Họ tên", &self.name),
            ("Số điện thoại", &self.phone),
            ("Email", &self.email),
        ]
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "employees"
    }

    fn element_name() -> &'static str {
        "Nhân viên"
    }

    fn list_name() -> &'static str {
        "Nhân viên"
    }

    fn id_prefix() -> &'static str {
        "E"
    }
}

// ============================================================================
// Denormalized view
// ============================================================================

/// Сотрудник с развёрнутыми должностью и отделом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    pub position: Option<Position>,
    pub department: Option<Department>,
}

impl FullView for FullEmployee {
    type Flat = Employee;

    fn flat(&self) -> &Employee {
        &self.employee
    }
}
