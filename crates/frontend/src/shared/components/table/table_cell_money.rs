//! Компонент ячейки таблицы для денежных значений
//!
//! ```text
//! <TableCellMoney value=device.value />
//! <TableCellMoney value=invoice.total bold=true />
//! ```

use super::number_format::format_vnd;
use leptos::prelude::*;

/// Денежное значение в донгах, выровненное по правому краю
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    value: f64,

    /// Жирный шрифт
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let style = if bold {
        "display: block; text-align: right; font-weight: 600;"
    } else {
        "display: block; text-align: right;"
    };

    view! {
        <span style=style>{format_vnd(value)}</span>
    }
}
