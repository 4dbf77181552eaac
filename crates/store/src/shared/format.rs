/// Форматирует число с разделителями тысяч (точками), дробная часть
/// округляется
///
/// # Примеры
/// ```
/// use store::shared::format::format_number;
/// assert_eq!(format_number(1234567.0), "1.234.567");
/// assert_eq!(format_number(42.4), "42");
/// assert_eq!(format_number(-5000.0), "-5.000");
/// ```
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let digits = (rounded.abs() as u64).to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if rounded < 0.0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Денежная сумма в донгах: "15.000.000 VND"
pub fn format_vnd(value: f64) -> String {
    format!("{} VND", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1.000");
        assert_eq!(format_number(500000.0), "500.000");
        assert_eq!(format_number(35000000.0), "35.000.000");
        assert_eq!(format_number(1234.6), "1.235");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(15_000_000.0), "15.000.000 VND");
        assert_eq!(format_vnd(300_000.0), "300.000 VND");
    }
}
