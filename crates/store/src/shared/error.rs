use thiserror::Error;

/// Ошибки хранилища. Текст ошибки показывается пользователю в уведомлении.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Vui lòng điền đầy đủ thông tin {entity}: {}", .fields.join(", "))]
    MissingFields {
        entity: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("Mã {id} đã tồn tại ({entity})")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Không tìm thấy {entity} với mã {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{field}: ngày không hợp lệ \"{value}\" (định dạng YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Hóa đơn {id} đã được thanh toán")]
    AlreadyPaid { id: String },

    #[error("Lỗi dữ liệu mẫu: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = StoreError::MissingFields {
            entity: "Nhân viên",
            fields: vec!["Họ tên", "Email"],
        };
        assert_eq!(
            err.to_string(),
            "Vui lòng điền đầy đủ thông tin Nhân viên: Họ tên, Email"
        );

        let err = StoreError::DuplicateId {
            entity: "Thiết bị",
            id: "D001".into(),
        };
        assert_eq!(err.to_string(), "Mã D001 đã tồn tại (Thiết bị)");
    }
}
