use crate::shared::list_utils::CellValue;
use leptos::prelude::*;
use std::sync::Arc;

type ValueFn<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type RenderFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Описание колонки таблицы
pub struct ColumnSpec<T> {
    /// Ключ колонки (для сортировки и поиска)
    pub key: &'static str,
    pub header: &'static str,
    value: ValueFn<T>,
    render: Option<RenderFn<T>>,
    pub sortable: bool,
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            value: Arc::clone(&self.value),
            render: self.render.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T> ColumnSpec<T> {
    pub fn new(
        key: &'static str,
        header: &'static str,
        value: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header,
            value: Arc::new(value),
            render: None,
            sortable: true,
        }
    }

    /// Собственное отображение ячейки вместо текстового значения
    pub fn render_with(mut self, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.value)(row)
    }

    /// Содержимое ячейки; неразрешённая ссылка показывается как "—"
    pub fn render(&self, row: &T) -> AnyView {
        if let Some(render) = &self.render {
            return render(row);
        }
        match self.value(row) {
            CellValue::Empty => view! { <span class="text-muted">"—"</span> }.into_any(),
            other => view! { <span>{other.search_text()}</span> }.into_any(),
        }
    }
}
