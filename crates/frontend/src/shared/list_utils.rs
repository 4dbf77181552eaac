/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use crate::shared::data_table::ColumnSpec;
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use leptos::prelude::*;
use std::cmp::Ordering;

// ============================================================================
// Значение ячейки
// ============================================================================

/// Значение колонки, по которому выполняются поиск и сортировка
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Текст для ссылки, которая могла не разрешиться
    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(CellValue::Empty, CellValue::text)
    }

    /// Строковое представление для поиска.
    /// Целые числа выводятся без дробной части
    pub fn search_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

thread_local! {
    /// Вьетнамская сортировка строк (Đ идёт после D, диакритика вторична)
    static COLLATOR: Option<Collator> = Collator::try_new(&locale!("vi").into(), CollatorOptions::new())
        .map_err(|e| log::error!("Collator unavailable, code point order used: {}", e))
        .ok();
}

/// Сравнение строк по правилам локали, при полном равенстве по исходной строке
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(c) => c.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

/// Сравнение двух ячеек.
///
/// Текст сравнивается с учётом локали. Числа сравниваются по разности.
/// Разнотипные и пустые значения несравнимы (`Equal`), стабильная
/// сортировка сохраняет исходный порядок.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Text(x), CellValue::Text(y)) => compare_text(x, y),
        (CellValue::Number(x), CellValue::Number(y)) => {
            let diff = x - y;
            if diff < 0.0 {
                Ordering::Less
            } else if diff > 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        _ => Ordering::Equal,
    }
}

// ============================================================================
// Сортировка
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Состояние сортировки таблицы: одна активная колонка
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Клик по заголовку: повторный клик меняет направление,
    /// другая колонка сбрасывает на возрастание
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Индикатор сортировки для заголовка
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field.as_deref() != Some(field) {
            return "";
        }
        match self.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }

    /// CSS класс для индикатора сортировки
    pub fn class(&self, field: &str) -> &'static str {
        if self.field.as_deref() == Some(field) {
            "sort-icon active"
        } else {
            "sort-icon"
        }
    }
}

/// Стабильная сортировка по значению колонки
pub fn sort_rows<T>(rows: &mut [T], accessor: impl Fn(&T) -> CellValue, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let cmp = compare_cells(&accessor(a), &accessor(b));
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

// ============================================================================
// Поиск
// ============================================================================

/// Фильтр по подстроке без учёта регистра; пустой запрос возвращает всё
pub fn filter_rows<T: Clone>(rows: &[T], term: &str, accessor: impl Fn(&T) -> CellValue) -> Vec<T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| accessor(row).search_text().to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Строки для отображения: фильтр по полю поиска, затем сортировка
pub fn visible_rows<T: Clone>(
    rows: &[T],
    columns: &[ColumnSpec<T>],
    search_field: Option<&str>,
    term: &str,
    sort: &SortState,
) -> Vec<T> {
    let find = |key: &str| columns.iter().find(|c| c.key == key);

    let mut result = match search_field.and_then(find) {
        Some(column) => filter_rows(rows, term, |row| column.value(row)),
        None => rows.to_vec(),
    };

    if let Some(column) = sort.field.as_deref().and_then(find) {
        if column.sortable {
            sort_rows(&mut result, |row| column.value(row), sort.direction);
        }
    }

    result
}

// ============================================================================
// UI
// ============================================================================

/// Поле поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 280px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                    on:click=move |_| on_change.run(String::new())
                    title="Xóa"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        value: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta", value: 3.0 },
            Row { name: "Alpha", value: 10.0 },
            Row { name: "alpha", value: 1.0 },
            Row { name: "Gamma", value: 2.0 },
        ]
    }

    fn columns() -> Vec<ColumnSpec<Row>> {
        vec![
            ColumnSpec::new("name", "Tên", |r: &Row| CellValue::text(r.name)),
            ColumnSpec::new("value", "Giá trị", |r: &Row| CellValue::Number(r.value)),
            ColumnSpec::new("actions", "", |_: &Row| CellValue::Empty).unsortable(),
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_toggle_cycles_and_resets() {
        let mut sort = SortState::default();
        sort.toggle("name");
        assert_eq!(sort.direction, SortDirection::Ascending);
        assert_eq!(sort.indicator("name"), " ▲");
        sort.toggle("name");
        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(sort.indicator("name"), " ▼");
        assert_eq!(sort.indicator("value"), "");
        sort.toggle("value");
        assert_eq!(sort.field.as_deref(), Some("value"));
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_compare_cells() {
        assert_eq!(compare_cells(&"a".into(), &"B".into()), Ordering::Less);
        // строчная буква раньше заглавной
        assert_eq!(compare_cells(&"alpha".into(), &"Alpha".into()), Ordering::Less);
        assert_eq!(compare_cells(&"Điều hòa".into(), &"Eo".into()), Ordering::Less);
        assert_eq!(compare_cells(&10.0.into(), &9.5.into()), Ordering::Greater);
        assert_eq!(compare_cells(&"10".into(), &10.0.into()), Ordering::Equal);
        assert_eq!(compare_cells(&CellValue::Empty, &"x".into()), Ordering::Equal);
    }

    #[test]
    fn test_sort_twice_reverses() {
        let cols = columns();
        let mut sort = SortState::default();
        sort.toggle("name");
        let asc = visible_rows(&rows(), &cols, None, "", &sort);
        assert_eq!(names(&asc), vec!["alpha", "Alpha", "beta", "Gamma"]);

        sort.toggle("name");
        let desc = visible_rows(&rows(), &cols, None, "", &sort);
        assert_eq!(names(&desc), vec!["Gamma", "beta", "Alpha", "alpha"]);
    }

    #[test]
    fn test_vietnamese_letters_sort_in_alphabet() {
        let mut names = vec!["Máy tính", "Điều hòa", "Dell", "Eo"];
        sort_rows(&mut names, |n| CellValue::text(*n), SortDirection::Ascending);
        assert_eq!(names, vec!["Dell", "Điều hòa", "Eo", "Máy tính"]);
    }

    #[test]
    fn test_unsortable_column_keeps_order() {
        let cols = columns();
        let mut sort = SortState::default();
        sort.toggle("actions");
        assert_eq!(visible_rows(&rows(), &cols, None, "", &sort), rows());
    }

    #[test]
    fn test_search() {
        let cols = columns();
        let sort = SortState::default();
        assert_eq!(visible_rows(&rows(), &cols, Some("name"), "  ", &sort).len(), 4);
        assert_eq!(names(&visible_rows(&rows(), &cols, Some("name"), "GAM", &sort)), vec!["Gamma"]);
        assert_eq!(visible_rows(&rows(), &cols, Some("name"), "zzz", &sort).len(), 0);
        // числа ищутся по строковому представлению без дробной части
        let found = filter_rows(&rows(), "10", |r| CellValue::Number(r.value));
        assert_eq!(names(&found), vec!["Alpha"]);
    }

    #[test]
    fn test_empty_search_returns_sorted_list() {
        let cols = columns();
        let mut sort = SortState::default();
        sort.toggle("value");
        sort.toggle("value");
        let all = visible_rows(&rows(), &cols, Some("name"), "", &sort);
        assert_eq!(names(&all), vec!["Alpha", "beta", "Gamma", "alpha"]);
    }
}
