use contracts::domain::a005_repair::aggregate::Repair;
use contracts::domain::a006_invoice::aggregate::Invoice;
use contracts::domain::a008_repair_history::aggregate::RepairHistory;

use crate::shared::error::{StoreError, StoreResult};
use crate::shared::format::format_number;
use crate::store::AssetStore;

/// Результат оплаты счёта
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    pub invoice_id: String,
    /// Код созданной записи журнала ремонтов; `None`, если ремонт счёта не найден
    pub history_id: Option<String>,
}

/// Оплатить счёт: отметить оплаченным и перенести в журнал ремонтов
pub fn pay_invoice(store: &mut AssetStore, invoice_id: &str) -> StoreResult<PaymentOutcome> {
    tracing::info!("Paying invoice {}", invoice_id);

    let mut invoice = store.get::<Invoice>(invoice_id).ok_or_else(|| StoreError::NotFound {
        entity: "Hóa đơn",
        id: invoice_id.to_string(),
    })?;
    if invoice.paid {
        return Err(StoreError::AlreadyPaid {
            id: invoice.id.clone(),
        });
    }

    // Запись журнала готовится и проверяется до изменения счёта
    let history = store.get::<Repair>(&invoice.repair_id).map(|repair| RepairHistory {
        id: store.next_id::<RepairHistory>(),
        notes: payment_notes(&invoice),
        contract_type_id: repair.contract_type_id,
        employee_id: repair.employee_id,
        device_id: repair.device_id,
    });
    if let Some(history) = &history {
        store.validate_create(history)?;
    } else {
        tracing::warn!(
            "Invoice {} refers to missing repair {}, history not created",
            invoice.id,
            invoice.repair_id
        );
    }

    invoice.paid = true;
    store.update(invoice)?;

    let history_id = match history {
        Some(history) => {
            let id = history.id.clone();
            store.create(history)?;
            Some(id)
        }
        None => None,
    };

    Ok(PaymentOutcome {
        invoice_id: invoice_id.to_string(),
        history_id,
    })
}

fn payment_notes(invoice: &Invoice) -> String {
    format!(
        "Thanh toán hóa đơn: {}. Nội dung: {}. Tổng tiền: {} VND",
        invoice.id,
        invoice.content,
        format_number(invoice.total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_creates_history() {
        let mut store = AssetStore::seeded().unwrap();
        let outcome = pay_invoice(&mut store, "IV001").unwrap();
        assert_eq!(outcome.history_id.as_deref(), Some("RH005"));

        assert!(store.get::<Invoice>("IV001").unwrap().paid);
        let history = store.get::<RepairHistory>("RH005").unwrap();
        assert_eq!(history.device_id, "D001");
        assert_eq!(history.employee_id, "E001");
        assert_eq!(history.contract_type_id, "3");
        assert_eq!(
            history.notes,
            "Thanh toán hóa đơn: IV001. Nội dung: Thanh toán sửa chữa máy tính. Tổng tiền: 500.000 VND"
        );

        let p = store.projections();
        let full = p
            .repair_histories
            .iter()
            .find(|h| h.history.id == "RH005")
            .unwrap();
        assert_eq!(full.device.as_ref().unwrap().device.name, "Máy tính văn phòng 01");
    }

    #[test]
    fn test_pay_twice_fails() {
        let mut store = AssetStore::seeded().unwrap();
        pay_invoice(&mut store, "IV002").unwrap();
        let histories = store.list::<RepairHistory>().len();

        assert!(matches!(
            pay_invoice(&mut store, "IV002"),
            Err(StoreError::AlreadyPaid { .. })
        ));
        assert_eq!(store.list::<RepairHistory>().len(), histories);
    }

    #[test]
    fn test_unknown_invoice_and_missing_repair() {
        let mut store = AssetStore::seeded().unwrap();
        assert!(matches!(
            pay_invoice(&mut store, "IV404"),
            Err(StoreError::NotFound { .. })
        ));

        let _: Repair = store.delete("R004").unwrap();
        let outcome = pay_invoice(&mut store, "IV004").unwrap();
        assert!(outcome.history_id.is_none());
        assert!(store.get::<Invoice>("IV004").unwrap().paid);
        assert_eq!(store.list::<RepairHistory>().len(), 3);
    }
}
