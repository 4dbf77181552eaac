use crate::domain::a005_repair::aggregate::FullRepair;
use crate::domain::common::{FullView, Record};
use serde::{Deserialize, Serialize};

// ============================================================================
// Invoice
// ============================================================================

/// Счёт за ремонт
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub date: String,
    pub content: String,
    /// Сумма, VND
    pub total: f64,
    pub repair_id: String,
    /// Признак оплаты; в исходных данных отсутствует
    #[serde(default)]
    pub paid: bool,
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã hóa đơn", &self.id),
            ("Ngày lập", &self.date),
            ("Nội dung", &self.content),
            ("Phiếu sửa chữa", &self.repair_id),
        ]
    }

    fn date_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Ngày lập", &self.date)]
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "invoices"
    }

    fn element_name() -> &'static str {
        "Hóa đơn"
    }

    fn list_name() -> &'static str {
        "Quản lý hóa đơn"
    }

    fn id_prefix() -> &'static str {
        "IV"
    }
}

// ============================================================================
// InvoiceDetail
// ============================================================================

/// Строка счёта
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetail {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    pub invoice_id: String,
}

impl Record for InvoiceDetail {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Mã chi tiết", &self.id),
            ("Tên hạng mục", &self.name),
            ("Hóa đơn", &self.invoice_id),
        ]
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "invoice_details"
    }

    fn element_name() -> &'static str {
        "Chi tiết hóa đơn"
    }

    fn list_name() -> &'static str {
        "Chi tiết hóa đơn"
    }

    fn id_prefix() -> &'static str {
        "ID"
    }
}

// ============================================================================
// Denormalized view
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullInvoice {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub repair: Option<FullRepair>,
    /// Строки счёта в порядке хранения
    pub details: Vec<InvoiceDetail>,
}

impl FullInvoice {
    /// Сумма по строкам (может расходиться с `total` шапки)
    pub fn details_total(&self) -> f64 {
        self.details.iter().map(|d| d.total).sum()
    }
}

impl FullView for FullInvoice {
    type Flat = Invoice;

    fn flat(&self) -> &Invoice {
        &self.invoice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_defaults_to_false_when_absent() {
        let json = r#"{ "id": "IV001", "date": "2023-07-11", "content": "Thanh toán sửa chữa máy tính",
            "total": 500000, "repairId": "R001" }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert!(!invoice.paid);
        assert_eq!(invoice.repair_id, "R001");
    }

    #[test]
    fn test_details_total_sums_lines() {
        let line = |id: &str, total: f64| InvoiceDetail {
            id: id.into(),
            name: "Gas".into(),
            quantity: 1.0,
            unit_price: total,
            total,
            invoice_id: "IV004".into(),
        };
        let full = FullInvoice {
            invoice: Invoice::default(),
            repair: None,
            details: vec![line("ID002", 500_000.0), line("ID003", 500_000.0)],
        };
        assert_eq!(full.details_total(), 1_000_000.0);
    }
}
