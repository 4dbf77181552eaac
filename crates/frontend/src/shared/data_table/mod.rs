//! Универсальная таблица: колонки задаются вызывающим кодом,
//! поиск и сортировка принадлежат экземпляру таблицы

pub mod column;

pub use column::ColumnSpec;

use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::{visible_rows, SearchInput, SortState};
use leptos::prelude::*;
use thaw::*;

const EMPTY_TEXT: &str = "Không có dữ liệu";

#[component]
pub fn DataTable<T>(
    /// Строки (денормализованные записи)
    #[prop(into)]
    rows: Signal<Vec<T>>,
    columns: Vec<ColumnSpec<T>>,
    /// Ключ колонки для поиска; без него строка поиска не показывается
    #[prop(optional)]
    search_field: Option<&'static str>,
    #[prop(optional, into)]
    search_placeholder: String,
    /// Клик по строке
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let sort = RwSignal::new(SortState::default());
    let term = RwSignal::new(String::new());
    let column_count = columns.with_value(|c| c.len()).to_string();

    let visible = Signal::derive(move || {
        let term = term.get();
        let sort = sort.get();
        rows.with(|rows| {
            columns.with_value(|cols| visible_rows(rows, cols, search_field, &term, &sort))
        })
    });

    view! {
        <div class="data-table">
            {search_field.map(|_| view! {
                <div class="data-table__toolbar">
                    <SearchInput
                        value=term
                        on_change=Callback::new(move |v: String| term.set(v))
                        placeholder=search_placeholder
                    />
                </div>
            })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns.get_value().into_iter().map(|col| {
                                if col.sortable {
                                    view! {
                                        <SortableHeaderCell
                                            label=col.header
                                            sort_field=col.key
                                            sort=sort
                                            on_sort=Callback::new(move |field: String| {
                                                sort.update(|s| s.toggle(&field));
                                            })
                                        />
                                    }.into_any()
                                } else {
                                    view! {
                                        <TableHeaderCell>{col.header}</TableHeaderCell>
                                    }.into_any()
                                }
                            }).collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let items = visible.get();
                            if items.is_empty() {
                                let column_count = column_count.clone();
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=column_count attr:class="data-table__empty">
                                            {EMPTY_TEXT}
                                        </TableCell>
                                    </TableRow>
                                }.into_any();
                            }

                            items.into_iter().map(|row| {
                                let row_for_click = row.clone();
                                let cells = columns.with_value(|cols| {
                                    cols.iter().map(|col| {
                                        let content = col.render(&row);
                                        view! { <TableCell>{content}</TableCell> }
                                    }).collect_view()
                                });
                                view! {
                                    <TableRow
                                        on:click=move |_| {
                                            if let Some(handler) = on_row_click {
                                                handler.run(row_for_click.clone());
                                            }
                                        }
                                        attr:style=if on_row_click.is_some() { "cursor: pointer;" } else { "" }
                                    >
                                        {cells}
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
