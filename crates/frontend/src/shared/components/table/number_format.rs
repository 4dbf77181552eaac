//! Утилиты форматирования чисел для таблиц

pub use store::shared::format::{format_number, format_vnd};

/// Количество: целые без дробной части, иначе два знака
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number(value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(1.0), "1");
        assert_eq!(format_quantity(1200.0), "1.200");
        assert_eq!(format_quantity(2.5), "2.50");
    }
}
