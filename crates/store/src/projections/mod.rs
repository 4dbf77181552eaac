//! Денормализованные представления: плоские записи с развёрнутыми ссылками

pub mod joiner;

pub use joiner::{
    join_devices, join_employees, join_inventories, join_invoices, join_maintenances,
    join_repair_histories, join_repairs, join_warranties,
};

use crate::data::Tables;
use contracts::domain::a001_device::aggregate::FullDevice;
use contracts::domain::a002_employee::aggregate::FullEmployee;
use contracts::domain::a003_maintenance::aggregate::FullMaintenance;
use contracts::domain::a004_inventory::aggregate::FullInventory;
use contracts::domain::a005_repair::aggregate::FullRepair;
use contracts::domain::a006_invoice::aggregate::FullInvoice;
use contracts::domain::a007_warranty::aggregate::FullWarranty;
use contracts::domain::a008_repair_history::aggregate::FullRepairHistory;

/// Все представления для одной версии данных
#[derive(Debug, Clone, Default)]
pub struct Projections {
    pub employees: Vec<FullEmployee>,
    pub devices: Vec<FullDevice>,
    pub maintenances: Vec<FullMaintenance>,
    pub inventories: Vec<FullInventory>,
    pub repairs: Vec<FullRepair>,
    pub invoices: Vec<FullInvoice>,
    pub warranties: Vec<FullWarranty>,
    pub repair_histories: Vec<FullRepairHistory>,
}

impl Projections {
    /// Построить все представления в порядке зависимостей:
    /// сотрудники и устройства один раз, затем зависимые документы
    /// через индексы по ID
    pub fn build(tables: &Tables) -> Self {
        let employees = join_employees(&tables.employees, &tables.positions, &tables.departments);
        let devices = join_devices(
            &tables.devices,
            &tables.device_types,
            &tables.device_locations,
            &tables.device_statuses,
            &tables.employees,
        );
        let maintenances = join_maintenances(&tables.maintenances, &devices);
        let inventories = join_inventories(&tables.inventories, &devices);
        let repairs = join_repairs(
            &tables.repairs,
            &tables.contract_types,
            &devices,
            &employees,
            &tables.suppliers,
        );
        let invoices = join_invoices(&tables.invoices, &repairs, &tables.invoice_details);
        let warranties = join_warranties(&tables.warranties, &devices, &tables.suppliers);
        let repair_histories = join_repair_histories(
            &tables.repair_histories,
            &tables.contract_types,
            &employees,
            &devices,
        );

        Self {
            employees,
            devices,
            maintenances,
            inventories,
            repairs,
            invoices,
            warranties,
            repair_histories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_seed;

    #[test]
    fn test_seed_fully_resolved() {
        let p = Projections::build(&load_seed().unwrap());

        assert_eq!(p.devices.len(), 5);
        for d in &p.devices {
            assert!(d.device_type.is_some(), "{}", d.device.id);
            assert!(d.device_location.is_some());
            assert!(d.device_status.is_some());
            assert!(d.employee.is_some());
        }
        assert!(p.repairs.iter().all(|r| r.device.is_some() && r.supplier.is_some()));

        let iv004 = p.invoices.iter().find(|i| i.invoice.id == "IV004").unwrap();
        let detail_ids: Vec<_> = iv004.details.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(detail_ids, vec!["ID002", "ID003"]);
        let repair = iv004.repair.as_ref().unwrap();
        assert_eq!(repair.repair.id, "R004");
        assert_eq!(
            repair.device.as_ref().unwrap().device_type.as_ref().unwrap().name,
            "Điều hòa"
        );
    }

    #[test]
    fn test_dependents_see_current_device() {
        let mut tables = load_seed().unwrap();
        tables.devices[0].device_type_id = "2".into();
        let p = Projections::build(&tables);

        let repair = p.repairs.iter().find(|r| r.repair.id == "R001").unwrap();
        let device = repair.device.as_ref().unwrap();
        assert_eq!(device.device.device_type_id, "2");
        assert_eq!(device.device_type.as_ref().unwrap().name, "Máy in");

        let warranty = p.warranties.iter().find(|w| w.warranty.id == "W001").unwrap();
        assert_eq!(
            warranty.device.as_ref().unwrap().device_type.as_ref().unwrap().name,
            "Máy in"
        );
    }
}
