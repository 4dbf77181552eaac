//! Хранилище учётных данных по офисному оборудованию
//!
//! Плоские записи лежат в репозиториях по одному на сущность, денормализованные
//! представления пересчитываются после каждой успешной мутации.

pub mod dashboards;
pub mod data;
pub mod projections;
pub mod shared;
pub mod store;
pub mod usecases;

pub use shared::config::AppConfig;
pub use shared::error::StoreError;
pub use store::{AssetStore, Collection};
