use std::sync::Arc;

use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a003_maintenance::aggregate::Maintenance;
use contracts::domain::a004_inventory::aggregate::Inventory;
use contracts::domain::a005_repair::aggregate::Repair;
use contracts::domain::a006_invoice::aggregate::{Invoice, InvoiceDetail};
use contracts::domain::a007_warranty::aggregate::Warranty;
use contracts::domain::a008_repair_history::aggregate::RepairHistory;
use contracts::domain::a009_reference::aggregate::{
    ContractType, Department, DeviceLocation, DeviceStatus, DeviceType, Position, Supplier,
};
use contracts::domain::common::Record;

use crate::data::{load_seed, Tables};
use crate::projections::Projections;
use crate::shared::error::{StoreError, StoreResult};
use crate::shared::id_gen::next_sequential_id;
use crate::shared::repository::{InMemoryRepository, Repository};
use crate::shared::validation::validate_record;

type Repo<T> = Box<dyn Repository<T>>;

/// Доступ к репозиторию сущности `T` внутри [`AssetStore`]
pub trait Collection<T: Record> {
    fn repository(&self) -> &dyn Repository<T>;

    fn repository_mut(&mut self) -> &mut Repo<T>;
}

/// Хранилище всех сущностей приложения
///
/// Каждая успешная мутация увеличивает `version` и пересобирает
/// [`Projections`], поэтому вложенные объекты всегда соответствуют
/// текущим справочникам.
pub struct AssetStore {
    device_types: Repo<DeviceType>,
    device_locations: Repo<DeviceLocation>,
    device_statuses: Repo<DeviceStatus>,
    departments: Repo<Department>,
    positions: Repo<Position>,
    suppliers: Repo<Supplier>,
    contract_types: Repo<ContractType>,
    employees: Repo<Employee>,
    devices: Repo<Device>,
    maintenances: Repo<Maintenance>,
    inventories: Repo<Inventory>,
    repairs: Repo<Repair>,
    invoices: Repo<Invoice>,
    invoice_details: Repo<InvoiceDetail>,
    warranties: Repo<Warranty>,
    repair_histories: Repo<RepairHistory>,
    version: u64,
    projections: Arc<Projections>,
}

fn in_memory<T: Record + Send + Sync + 'static>(items: Vec<T>) -> Repo<T> {
    Box::new(InMemoryRepository::new(items))
}

impl AssetStore {
    /// Хранилище в памяти, заполненное переданными списками
    pub fn from_tables(tables: Tables) -> Self {
        let projections = Arc::new(Projections::build(&tables));
        Self {
            device_types: in_memory(tables.device_types),
            device_locations: in_memory(tables.device_locations),
            device_statuses: in_memory(tables.device_statuses),
            departments: in_memory(tables.departments),
            positions: in_memory(tables.positions),
            suppliers: in_memory(tables.suppliers),
            contract_types: in_memory(tables.contract_types),
            employees: in_memory(tables.employees),
            devices: in_memory(tables.devices),
            maintenances: in_memory(tables.maintenances),
            inventories: in_memory(tables.inventories),
            repairs: in_memory(tables.repairs),
            invoices: in_memory(tables.invoices),
            invoice_details: in_memory(tables.invoice_details),
            warranties: in_memory(tables.warranties),
            repair_histories: in_memory(tables.repair_histories),
            version: 0,
            projections,
        }
    }

    /// Хранилище с демонстрационными данными
    pub fn seeded() -> StoreResult<Self> {
        let store = Self::from_tables(load_seed()?);
        tracing::info!("Asset store initialised from seed");
        Ok(store)
    }

    /// Подменить репозиторий сущности (например, на другую реализацию хранения)
    pub fn with_repository<T: Record>(mut self, repository: Repo<T>) -> Self
    where
        Self: Collection<T>,
    {
        *Collection::<T>::repository_mut(&mut self) = repository;
        self.touch();
        self
    }

    /// Номер версии данных; растёт с каждой успешной мутацией
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Представления текущей версии данных
    pub fn projections(&self) -> Arc<Projections> {
        Arc::clone(&self.projections)
    }

    /// Снимок всех плоских списков
    pub fn tables(&self) -> Tables {
        Tables {
            device_types: self.device_types.list(),
            device_locations: self.device_locations.list(),
            device_statuses: self.device_statuses.list(),
            departments: self.departments.list(),
            positions: self.positions.list(),
            suppliers: self.suppliers.list(),
            contract_types: self.contract_types.list(),
            employees: self.employees.list(),
            devices: self.devices.list(),
            maintenances: self.maintenances.list(),
            inventories: self.inventories.list(),
            repairs: self.repairs.list(),
            invoices: self.invoices.list(),
            invoice_details: self.invoice_details.list(),
            warranties: self.warranties.list(),
            repair_histories: self.repair_histories.list(),
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        self.projections = Arc::new(Projections::build(&self.tables()));
        tracing::debug!("Projections rebuilt for version {}", self.version);
    }

    // ============================================================================
    // Чтение
    // ============================================================================

    pub fn list<T: Record>(&self) -> Vec<T>
    where
        Self: Collection<T>,
    {
        Collection::<T>::repository(self).list()
    }

    pub fn get<T: Record>(&self, id: &str) -> Option<T>
    where
        Self: Collection<T>,
    {
        Collection::<T>::repository(self).get(id)
    }

    /// Следующий свободный код с префиксом сущности
    pub fn next_id<T: Record>(&self) -> String
    where
        Self: Collection<T>,
    {
        let ids: Vec<String> = Collection::<T>::repository(self)
            .list()
            .into_iter()
            .map(|r| r.id().to_string())
            .collect();
        next_sequential_id(ids, T::id_prefix())
    }

    // ============================================================================
    // Проверки без изменения данных
    // ============================================================================

    pub fn validate_create<T: Record>(&self, record: &T) -> StoreResult<()>
    where
        Self: Collection<T>,
    {
        validate_record(record)?;
        if Collection::<T>::repository(self).contains(record.id()) {
            return Err(StoreError::DuplicateId {
                entity: T::element_name(),
                id: record.id().to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_update<T: Record>(&self, record: &T) -> StoreResult<()>
    where
        Self: Collection<T>,
    {
        validate_record(record)?;
        if !Collection::<T>::repository(self).contains(record.id()) {
            return Err(StoreError::NotFound {
                entity: T::element_name(),
                id: record.id().to_string(),
            });
        }
        Ok(())
    }

    // ============================================================================
    // Мутации
    // ============================================================================

    pub fn create<T: Record>(&mut self, record: T) -> StoreResult<()>
    where
        Self: Collection<T>,
    {
        self.validate_create(&record)?;
        let id = record.id().to_string();
        Collection::<T>::repository_mut(self).insert(record)?;
        self.touch();
        tracing::info!("Created {} {}", T::full_name(), id);
        Ok(())
    }

    pub fn update<T: Record>(&mut self, record: T) -> StoreResult<()>
    where
        Self: Collection<T>,
    {
        self.validate_update(&record)?;
        let id = record.id().to_string();
        Collection::<T>::repository_mut(self).replace(record)?;
        self.touch();
        tracing::info!("Updated {} {}", T::full_name(), id);
        Ok(())
    }

    /// Удаление без каскада: ссылки из зависимых записей остаются висячими
    pub fn delete<T: Record>(&mut self, id: &str) -> StoreResult<T>
    where
        Self: Collection<T>,
    {
        let removed = Collection::<T>::repository_mut(self).remove(id)?;
        self.touch();
        tracing::info!("Deleted {} {}", T::full_name(), id);
        Ok(removed)
    }
}

macro_rules! collection {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl Collection<$ty> for AssetStore {
                fn repository(&self) -> &dyn Repository<$ty> {
                    self.$field.as_ref()
                }

                fn repository_mut(&mut self) -> &mut Repo<$ty> {
                    &mut self.$field
                }
            }
        )*
    };
}

collection!(
    DeviceType => device_types,
    DeviceLocation => device_locations,
    DeviceStatus => device_statuses,
    Department => departments,
    Position => positions,
    Supplier => suppliers,
    ContractType => contract_types,
    Employee => employees,
    Device => devices,
    Maintenance => maintenances,
    Inventory => inventories,
    Repair => repairs,
    Invoice => invoices,
    InvoiceDetail => invoice_details,
    Warranty => warranties,
    RepairHistory => repair_histories,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AssetStore {
        AssetStore::seeded().unwrap()
    }

    fn new_device() -> Device {
        Device {
            id: "D006".into(),
            name: "Máy chiếu Epson".into(),
            value: 9_000_000.0,
            purchase_date: "2024-02-01".into(),
            device_type_id: "2".into(),
            device_location_id: "5".into(),
            device_status_id: "1".into(),
            employee_id: "E003".into(),
        }
    }

    #[test]
    fn test_create_appends_and_joins() {
        let mut store = store();
        assert_eq!(store.next_id::<Device>(), "D006");

        store.create(new_device()).unwrap();
        assert_eq!(store.list::<Device>().len(), 6);
        assert_eq!(store.version(), 1);

        let projections = store.projections();
        let full = projections
            .devices
            .iter()
            .find(|d| d.device.id == "D006")
            .unwrap();
        assert_eq!(full.device_type.as_ref().unwrap().name, "Máy in");
        assert_eq!(full.employee.as_ref().unwrap().name, "Lê Văn C");
        assert_eq!(store.next_id::<Device>(), "D007");
    }

    #[test]
    fn test_next_id_after_user_typed_max_suffix() {
        let mut store = store();
        let huge = Device {
            id: format!("D{}", u64::MAX),
            ..new_device()
        };
        store.create(huge).unwrap();
        assert_eq!(store.next_id::<Device>(), "D006");
    }

    #[test]
    fn test_duplicate_rejected_without_mutation() {
        let mut store = store();
        let dup = Device {
            id: "D001".into(),
            ..new_device()
        };
        assert!(matches!(store.create(dup), Err(StoreError::DuplicateId { .. })));
        assert_eq!(store.list::<Device>().len(), 5);
        assert_eq!(store.version(), 0);
        assert_eq!(store.get::<Device>("D001").unwrap().name, "Máy tính văn phòng 01");
    }

    #[test]
    fn test_invalid_record_rejected() {
        let mut store = store();
        let broken = Device {
            name: String::new(),
            ..new_device()
        };
        assert!(matches!(
            store.validate_create(&broken),
            Err(StoreError::MissingFields { .. })
        ));
        assert!(store.create(broken).is_err());

        let bad_date = Device {
            purchase_date: "2024-13-01".into(),
            ..new_device()
        };
        assert!(matches!(store.create(bad_date), Err(StoreError::InvalidDate { .. })));
        assert_eq!(store.list::<Device>().len(), 5);
    }

    #[test]
    fn test_update_refreshes_nested_and_dependents() {
        let mut store = store();
        let mut device = store.get::<Device>("D001").unwrap();
        device.device_type_id = "4".into();
        store.update(device).unwrap();

        let p = store.projections();
        let d001 = p.devices.iter().find(|d| d.device.id == "D001").unwrap();
        assert_eq!(d001.device_type.as_ref().unwrap().name, "Máy photocopy");

        let r001 = p.repairs.iter().find(|r| r.repair.id == "R001").unwrap();
        assert_eq!(
            r001.device.as_ref().unwrap().device_type.as_ref().unwrap().name,
            "Máy photocopy"
        );
        // порядок записей не меняется
        assert_eq!(p.devices[0].device.id, "D001");
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut store = store();
        let ghost = Device {
            id: "D404".into(),
            ..new_device()
        };
        assert!(matches!(store.update(ghost), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_delete_leaves_dangling_references() {
        let mut store = store();
        let removed: Employee = store.delete("E001").unwrap();
        assert_eq!(removed.name, "Nguyễn Văn A");
        assert_eq!(store.list::<Employee>().len(), 4);

        let p = store.projections();
        let d001 = p.devices.iter().find(|d| d.device.id == "D001").unwrap();
        assert_eq!(d001.device.employee_id, "E001");
        assert!(d001.employee.is_none());

        assert!(matches!(
            store.delete::<Employee>("E001"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_reference_catalog_crud() {
        let mut store = store();
        let id = store.next_id::<DeviceType>();
        // у справочников нет префикса
        assert_eq!(id, "006");
        store
            .create(DeviceType {
                id,
                name: "Máy chiếu".into(),
            })
            .unwrap();
        assert_eq!(store.list::<DeviceType>().len(), 6);
    }
}
