use chrono::NaiveDate;

/// Разбор даты в формате YYYY-MM-DD (формат `<input type="date">`)
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2023-01-15"),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert_eq!(parse_iso_date(" 2024-02-29 "), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(parse_iso_date("15/01/2023").is_none());
        assert!(parse_iso_date("2023-02-30").is_none());
        assert!(parse_iso_date("").is_none());
    }
}
