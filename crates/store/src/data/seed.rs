use super::tables::Tables;
use crate::shared::error::StoreResult;

/// Демонстрационные данные, встроенные в бандл
const SEED_JSON: &str = include_str!("seed.json");

/// Разобрать встроенный набор данных
pub fn load_seed() -> StoreResult<Tables> {
    let tables: Tables = serde_json::from_str(SEED_JSON)?;
    tracing::debug!(
        "Seed loaded: {} devices, {} employees, {} repairs",
        tables.devices.len(),
        tables.employees.len(),
        tables.repairs.len()
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{DeviceCondition, MaintenanceStatus, RepairStatus};

    #[test]
    fn test_seed_counts() {
        let t = load_seed().unwrap();
        assert_eq!(t.device_types.len(), 5);
        assert_eq!(t.device_locations.len(), 5);
        assert_eq!(t.device_statuses.len(), 5);
        assert_eq!(t.departments.len(), 5);
        assert_eq!(t.positions.len(), 5);
        assert_eq!(t.suppliers.len(), 3);
        assert_eq!(t.contract_types.len(), 4);
        assert_eq!(t.employees.len(), 5);
        assert_eq!(t.devices.len(), 5);
        assert_eq!(t.maintenances.len(), 5);
        assert_eq!(t.inventories.len(), 5);
        assert_eq!(t.repairs.len(), 5);
        assert_eq!(t.invoices.len(), 3);
        assert_eq!(t.invoice_details.len(), 4);
        assert_eq!(t.warranties.len(), 5);
        assert_eq!(t.repair_histories.len(), 3);
    }

    #[test]
    fn test_seed_enums_and_numbers() {
        let t = load_seed().unwrap();
        assert_eq!(t.devices[4].value, 35_000_000.0);
        assert_eq!(t.maintenances[2].status, MaintenanceStatus::Pending);
        assert_eq!(t.inventories[4].condition, DeviceCondition::Repair);
        assert_eq!(t.repairs[0].status, RepairStatus::Done);
        assert!(t.invoices.iter().all(|i| !i.paid));
        assert_eq!(t.suppliers[0].contact_person.as_deref(), Some("Nguyễn Văn A"));
    }
}
