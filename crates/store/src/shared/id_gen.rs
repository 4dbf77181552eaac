/// Следующий последовательный код: префикс + (максимальный числовой
/// суффикс + 1), не меньше трёх цифр
///
/// Коды с другим префиксом, нечисловым суффиксом или суффиксом, у которого
/// нет следующего значения в `u64`, игнорируются.
///
/// ```
/// use store::shared::id_gen::next_sequential_id;
/// assert_eq!(next_sequential_id(["D001", "D005"], "D"), "D006");
/// assert_eq!(next_sequential_id(Vec::<&str>::new(), "RH"), "RH001");
/// ```
pub fn next_sequential_id<I, S>(existing: I, prefix: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let next = existing
        .into_iter()
        .filter_map(|id| {
            let suffix = id.as_ref().strip_prefix(prefix)?;
            if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            suffix.parse::<u64>().ok()?.checked_add(1)
        })
        .max()
        .unwrap_or(1);

    format!("{}{:03}", prefix, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_gap() {
        // RH003 отсутствует, берётся максимум
        assert_eq!(next_sequential_id(["RH001", "RH002", "RH004"], "RH"), "RH005");
        assert_eq!(next_sequential_id(["IV001", "IV002", "IV004"], "IV"), "IV005");
    }

    #[test]
    fn test_ignores_foreign_and_non_numeric() {
        // "ID001" не относится к префиксу "I": суффикс "D001" нечисловой
        let ids = ["I001", "I002", "ID001", "Ixyz", "I"];
        assert_eq!(next_sequential_id(ids, "I"), "I003");
    }

    #[test]
    fn test_suffix_at_u64_limit_is_skipped() {
        let ids = ["D005", "D18446744073709551615", "D99999999999999999999"];
        assert_eq!(next_sequential_id(ids, "D"), "D006");
        assert_eq!(next_sequential_id(["D18446744073709551615"], "D"), "D001");
    }

    #[test]
    fn test_width_grows_past_three_digits() {
        assert_eq!(next_sequential_id(["E999"], "E"), "E1000");
        assert_eq!(next_sequential_id(["E0041"], "E"), "E042");
    }
}
