use std::collections::HashMap;

use contracts::domain::a001_device::aggregate::{Device, FullDevice};
use contracts::domain::a002_employee::aggregate::{Employee, FullEmployee};
use contracts::domain::a003_maintenance::aggregate::{FullMaintenance, Maintenance};
use contracts::domain::a004_inventory::aggregate::{FullInventory, Inventory};
use contracts::domain::a005_repair::aggregate::{FullRepair, Repair};
use contracts::domain::a006_invoice::aggregate::{FullInvoice, Invoice, InvoiceDetail};
use contracts::domain::a007_warranty::aggregate::{FullWarranty, Warranty};
use contracts::domain::a008_repair_history::aggregate::{FullRepairHistory, RepairHistory};
use contracts::domain::a009_reference::aggregate::{
    ContractType, Department, DeviceLocation, DeviceStatus, DeviceType, Position, Supplier,
};
use contracts::domain::common::{FullView, Record};

// ============================================================================
// Индексы по ID
// ============================================================================

/// Индекс плоских записей. При повторе ID побеждает первая запись
fn index_records<T: Record>(items: &[T]) -> HashMap<&str, &T> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(item.id()).or_insert(item);
    }
    index
}

fn index_views<V: FullView>(items: &[V]) -> HashMap<&str, &V> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(item.flat().id()).or_insert(item);
    }
    index
}

/// Разрешить ссылку; пустой ключ или висячая ссылка дают `None`
fn resolve<T: Clone>(index: &HashMap<&str, &T>, key: &str) -> Option<T> {
    if key.is_empty() {
        return None;
    }
    index.get(key).map(|found| (*found).clone())
}

// ============================================================================
// Справочники и устройства
// ============================================================================

pub fn join_employees(
    employees: &[Employee],
    positions: &[Position],
    departments: &[Department],
) -> Vec<FullEmployee> {
    let positions = index_records(positions);
    let departments = index_records(departments);

    employees
        .iter()
        .map(|e| FullEmployee {
            employee: e.clone(),
            position: resolve(&positions, &e.position_id),
            department: resolve(&departments, &e.department_id),
        })
        .collect()
}

pub fn join_devices(
    devices: &[Device],
    types: &[DeviceType],
    locations: &[DeviceLocation],
    statuses: &[DeviceStatus],
    employees: &[Employee],
) -> Vec<FullDevice> {
    let types = index_records(types);
    let locations = index_records(locations);
    let statuses = index_records(statuses);
    let employees = index_records(employees);

    devices
        .iter()
        .map(|d| FullDevice {
            device: d.clone(),
            device_type: resolve(&types, &d.device_type_id),
            device_location: resolve(&locations, &d.device_location_id),
            device_status: resolve(&statuses, &d.device_status_id),
            employee: resolve(&employees, &d.employee_id),
        })
        .collect()
}

// ============================================================================
// Документы по устройству
// ============================================================================

pub fn join_maintenances(items: &[Maintenance], devices: &[FullDevice]) -> Vec<FullMaintenance> {
    let devices = index_views(devices);
    items
        .iter()
        .map(|m| FullMaintenance {
            maintenance: m.clone(),
            device: resolve(&devices, &m.device_id),
        })
        .collect()
}

pub fn join_inventories(items: &[Inventory], devices: &[FullDevice]) -> Vec<FullInventory> {
    let devices = index_views(devices);
    items
        .iter()
        .map(|i| FullInventory {
            inventory: i.clone(),
            device: resolve(&devices, &i.device_id),
        })
        .collect()
}

pub fn join_repairs(
    items: &[Repair],
    contract_types: &[ContractType],
    devices: &[FullDevice],
    employees: &[FullEmployee],
    suppliers: &[Supplier],
) -> Vec<FullRepair> {
    let contract_types = index_records(contract_types);
    let devices = index_views(devices);
    let employees = index_views(employees);
    let suppliers = index_records(suppliers);

    items
        .iter()
        .map(|r| FullRepair {
            repair: r.clone(),
            contract_type: resolve(&contract_types, &r.contract_type_id),
            device: resolve(&devices, &r.device_id),
            employee: resolve(&employees, &r.employee_id),
            supplier: resolve(&suppliers, &r.supplier_id),
        })
        .collect()
}

/// Счета со ссылкой на ремонт и собственными строками (по `invoice_id`)
pub fn join_invoices(
    items: &[Invoice],
    repairs: &[FullRepair],
    details: &[InvoiceDetail],
) -> Vec<FullInvoice> {
    let repairs = index_views(repairs);
    let mut by_invoice: HashMap<&str, Vec<InvoiceDetail>> = HashMap::new();
    for detail in details {
        by_invoice
            .entry(detail.invoice_id.as_str())
            .or_default()
            .push(detail.clone());
    }

    items
        .iter()
        .map(|i| FullInvoice {
            invoice: i.clone(),
            repair: resolve(&repairs, &i.repair_id),
            details: by_invoice.get(i.id.as_str()).cloned().unwrap_or_default(),
        })
        .collect()
}

pub fn join_warranties(
    items: &[Warranty],
    devices: &[FullDevice],
    suppliers: &[Supplier],
) -> Vec<FullWarranty> {
    let devices = index_views(devices);
    let suppliers = index_records(suppliers);
    items
        .iter()
        .map(|w| FullWarranty {
            warranty: w.clone(),
            device: resolve(&devices, &w.device_id),
            supplier: resolve(&suppliers, &w.supplier_id),
        })
        .collect()
}

pub fn join_repair_histories(
    items: &[RepairHistory],
    contract_types: &[ContractType],
    employees: &[FullEmployee],
    devices: &[FullDevice],
) -> Vec<FullRepairHistory> {
    let contract_types = index_records(contract_types);
    let employees = index_views(employees);
    let devices = index_views(devices);
    items
        .iter()
        .map(|h| FullRepairHistory {
            history: h.clone(),
            contract_type: resolve(&contract_types, &h.contract_type_id),
            employee: resolve(&employees, &h.employee_id),
            device: resolve(&devices, &h.device_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<DeviceType> {
        vec![DeviceType {
            id: "1".into(),
            name: "Máy tính".into(),
        }]
    }

    #[test]
    fn test_unmatched_keys_are_none() {
        let devices = vec![
            Device {
                id: "D001".into(),
                device_type_id: "1".into(),
                employee_id: "E404".into(),
                ..Default::default()
            },
            Device {
                id: "D002".into(),
                ..Default::default()
            },
        ];
        let full = join_devices(&devices, &types(), &[], &[], &[]);

        assert_eq!(full[0].device_type.as_ref().unwrap().name, "Máy tính");
        assert!(full[0].employee.is_none());
        assert!(full[0].device_location.is_none());
        assert!(full[1].device_type.is_none());
    }

    #[test]
    fn test_invoice_without_details_gets_empty_vec() {
        let invoices = vec![Invoice {
            id: "IV009".into(),
            repair_id: "R404".into(),
            ..Default::default()
        }];
        let full = join_invoices(&invoices, &[], &[]);
        assert!(full[0].details.is_empty());
        assert!(full[0].repair.is_none());
    }

    #[test]
    fn test_employee_position_and_department() {
        let employees = vec![Employee {
            id: "E001".into(),
            position_id: "3".into(),
            department_id: "9".into(),
            ..Default::default()
        }];
        let positions = vec![Position {
            id: "3".into(),
            name: "Nhân viên".into(),
        }];
        let full = join_employees(&employees, &positions, &[]);
        assert_eq!(full[0].position.as_ref().unwrap().name, "Nhân viên");
        assert!(full[0].department.is_none());
    }
}
