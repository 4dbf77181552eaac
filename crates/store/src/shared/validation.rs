use super::error::{StoreError, StoreResult};
use contracts::domain::common::{parse_iso_date, Record};

/// Проверка записи перед сохранением: обязательные поля, затем даты
pub fn validate_record<T: Record>(record: &T) -> StoreResult<()> {
    let missing = record.missing_fields();
    if !missing.is_empty() {
        return Err(StoreError::MissingFields {
            entity: T::element_name(),
            fields: missing,
        });
    }

    for (field, value) in record.date_fields() {
        // Пустая необязательная дата допустима
        if value.trim().is_empty() {
            continue;
        }
        if parse_iso_date(value).is_none() {
            return Err(StoreError::InvalidDate {
                field,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_maintenance::aggregate::Maintenance;

    fn maintenance() -> Maintenance {
        Maintenance {
            id: "M006".into(),
            date: "2024-03-01".into(),
            device_id: "D001".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate_record(&maintenance()).is_ok());
    }

    #[test]
    fn test_missing_fields_listed() {
        let record = Maintenance {
            device_id: String::new(),
            ..maintenance()
        };
        match validate_record(&record) {
            Err(StoreError::MissingFields { fields, .. }) => assert_eq!(fields, vec!["Thiết bị"]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_date_rejected() {
        let record = Maintenance {
            date: "01/03/2024".into(),
            ..maintenance()
        };
        assert!(matches!(
            validate_record(&record),
            Err(StoreError::InvalidDate { field: "Ngày bảo trì", .. })
        ));
    }
}
