//! Общие типы предметной области: плоские записи, денормализованные
//! представления и перечисления статусов.

pub mod domain;
pub mod enums;
