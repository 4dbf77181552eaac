/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" -> "15/03/2024"; нераспознанная строка возвращается как есть
pub fn format_date(date_str: &str) -> String {
    if let Some((year, rest)) = date_str.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Сегодняшняя дата в часовом поясе браузера
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-01-15"), "15/01/2023");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("không rõ"), "không rõ");
    }
}
