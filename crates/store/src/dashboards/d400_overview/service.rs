use chrono::NaiveDate;
use contracts::enums::{MaintenanceStatus, RepairStatus};

use crate::store::AssetStore;

/// Срочная работа для списка на главной
#[derive(Debug, Clone, PartialEq)]
pub struct UrgentItem {
    /// Код документа (обслуживания или ремонта)
    pub record_id: String,
    /// Наименование устройства или "—", если устройство не найдено
    pub device_name: String,
    pub date: String,
}

/// Сводка для главной страницы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub devices: usize,
    pub maintenances: usize,
    pub maintenances_pending: usize,
    pub inventories: usize,
    pub employees: usize,
    pub repairs: usize,
    pub repairs_pending: usize,
    pub invoices: usize,
    pub warranties: usize,
    pub warranties_expired: usize,
    pub repair_histories: usize,
    pub urgent_maintenances: Vec<UrgentItem>,
    pub urgent_repairs: Vec<UrgentItem>,
}

const NO_DEVICE: &str = "—";

impl DashboardSummary {
    /// Посчитать сводку по текущей версии данных на дату `today`
    pub fn compute(store: &AssetStore, today: NaiveDate, limit: usize) -> Self {
        let p = store.projections();

        let pending_maintenances: Vec<_> = p
            .maintenances
            .iter()
            .filter(|m| m.maintenance.status == MaintenanceStatus::Pending)
            .collect();
        let pending_repairs: Vec<_> = p
            .repairs
            .iter()
            .filter(|r| r.repair.status == RepairStatus::Pending)
            .collect();

        let urgent_maintenances = pending_maintenances
            .iter()
            .take(limit)
            .map(|m| UrgentItem {
                record_id: m.maintenance.id.clone(),
                device_name: m
                    .device
                    .as_ref()
                    .map(|d| d.display_name().to_string())
                    .unwrap_or_else(|| NO_DEVICE.to_string()),
                date: m.maintenance.date.clone(),
            })
            .collect();
        let urgent_repairs = pending_repairs
            .iter()
            .take(limit)
            .map(|r| UrgentItem {
                record_id: r.repair.id.clone(),
                device_name: r
                    .device
                    .as_ref()
                    .map(|d| d.display_name().to_string())
                    .unwrap_or_else(|| NO_DEVICE.to_string()),
                date: r.repair.repair_date.clone(),
            })
            .collect();

        let summary = Self {
            devices: p.devices.len(),
            maintenances: p.maintenances.len(),
            maintenances_pending: pending_maintenances.len(),
            inventories: p.inventories.len(),
            employees: p.employees.len(),
            repairs: p.repairs.len(),
            repairs_pending: pending_repairs.len(),
            invoices: p.invoices.len(),
            warranties: p.warranties.len(),
            warranties_expired: p
                .warranties
                .iter()
                .filter(|w| w.warranty.is_expired(today))
                .count(),
            repair_histories: p.repair_histories.len(),
            urgent_maintenances,
            urgent_repairs,
        };
        tracing::debug!("Dashboard summary for {}: {:?}", today, summary);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_device::aggregate::Device;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_seed_counts() {
        let store = AssetStore::seeded().unwrap();
        let s = DashboardSummary::compute(&store, day("2025-03-01"), 5);

        assert_eq!(s.devices, 5);
        assert_eq!(s.maintenances, 5);
        assert_eq!(s.maintenances_pending, 2);
        assert_eq!(s.repairs_pending, 2);
        assert_eq!(s.invoices, 3);
        assert_eq!(s.repair_histories, 3);
        // W001 (2024-01-15) и W002 (2025-02-20)
        assert_eq!(s.warranties_expired, 2);

        let ids: Vec<_> = s.urgent_maintenances.iter().map(|u| u.record_id.as_str()).collect();
        assert_eq!(ids, vec!["M003", "M005"]);
        assert_eq!(s.urgent_repairs[0].device_name, "Máy scan Canon S5678");
        assert_eq!(s.urgent_repairs[0].date, "2023-09-20");
    }

    #[test]
    fn test_limit_and_missing_device() {
        let mut store = AssetStore::seeded().unwrap();
        let _: Device = store.delete("D003").unwrap();
        let s = DashboardSummary::compute(&store, day("2020-01-01"), 1);

        assert_eq!(s.urgent_maintenances.len(), 1);
        assert_eq!(s.urgent_maintenances[0].record_id, "M003");
        assert_eq!(s.urgent_maintenances[0].device_name, "—");
        assert_eq!(s.warranties_expired, 0);
    }
}
