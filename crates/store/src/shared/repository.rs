use super::error::{StoreError, StoreResult};
use contracts::domain::common::Record;

/// Хранилище плоских записей одной сущности
///
/// UI работает только через этот трейт и не знает, как устроено хранение.
pub trait Repository<T: Record>: Send + Sync {
    /// Все записи в порядке хранения
    fn list(&self) -> Vec<T>;

    fn get(&self, id: &str) -> Option<T>;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Добавить запись в конец; дубликат ID отклоняется до изменения данных
    fn insert(&mut self, record: T) -> StoreResult<()>;

    /// Заменить запись с тем же ID на месте
    fn replace(&mut self, record: T) -> StoreResult<()>;

    /// Удалить запись по ID, вернуть удалённую
    fn remove(&mut self, id: &str) -> StoreResult<T>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Репозиторий в памяти поверх упорядоченного `Vec`
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn not_found(id: &str) -> StoreError {
        StoreError::NotFound {
            entity: T::element_name(),
            id: id.to_string(),
        }
    }
}

impl<T: Record + Send + Sync> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn insert(&mut self, record: T) -> StoreResult<()> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId {
                entity: T::element_name(),
                id: record.id().to_string(),
            });
        }
        self.items.push(record);
        Ok(())
    }

    fn replace(&mut self, record: T) -> StoreResult<()> {
        let index = self
            .position(record.id())
            .ok_or_else(|| Self::not_found(record.id()))?;
        self.items[index] = record;
        Ok(())
    }

    fn remove(&mut self, id: &str) -> StoreResult<T> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        Ok(self.items.remove(index))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_reference::aggregate::DeviceType;

    fn repo() -> InMemoryRepository<DeviceType> {
        InMemoryRepository::new(vec![
            DeviceType {
                id: "1".into(),
                name: "Máy tính".into(),
            },
            DeviceType {
                id: "2".into(),
                name: "Máy in".into(),
            },
        ])
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut repo = repo();
        let dup = DeviceType {
            id: "2".into(),
            name: "Khác".into(),
        };
        assert!(matches!(repo.insert(dup), Err(StoreError::DuplicateId { .. })));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get("2").unwrap().name, "Máy in");
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut repo = repo();
        repo.replace(DeviceType {
            id: "1".into(),
            name: "Laptop".into(),
        })
        .unwrap();
        let names: Vec<_> = repo.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Laptop", "Máy in"]);
    }

    #[test]
    fn test_remove_and_missing() {
        let mut repo = repo();
        let removed = repo.remove("1").unwrap();
        assert_eq!(removed.name, "Máy tính");
        assert!(!repo.contains("1"));
        assert!(matches!(repo.remove("1"), Err(StoreError::NotFound { .. })));
        assert!(matches!(
            repo.replace(DeviceType::default()),
            Err(StoreError::NotFound { .. })
        ));
    }
}
