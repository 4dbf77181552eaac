//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```text
//! <SortableHeaderCell
//!     label="Giá trị"
//!     sort_field="value"
//!     sort=sort
//!     on_sort=Callback::new(move |field: String| sort.update(|s| s.toggle(&field)))
//! />
//! ```

use crate::shared::list_utils::SortState;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка с индикатором сортировки (▲▼)
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее состояние сортировки таблицы
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| s.class(&sort_field_for_class))>
                    {move || sort.with(|s| s.indicator(&sort_field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
