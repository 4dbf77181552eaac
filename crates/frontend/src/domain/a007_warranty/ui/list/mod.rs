use crate::domain::a007_warranty::ui::details::WarrantyDetails;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::PageHeader;
use crate::shared::crud::{delete_column, CrudViewModel};
use crate::shared::data_table::{ColumnSpec, DataTable};
use crate::shared::date_utils::{format_date, today};
use crate::shared::form_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::CellValue;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::use_store;
use chrono::NaiveDate;
use contracts::domain::a007_warranty::aggregate::{FullWarranty, Warranty};
use contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Срок гарантии на дату `today`
pub fn warranty_state(warranty: &Warranty, today: NaiveDate) -> &'static str {
    if warranty.is_expired(today) {
        "hết hạn"
    } else {
        "còn hạn"
    }
}

pub fn warranty_columns(today: NaiveDate) -> Vec<ColumnSpec<FullWarranty>> {
    vec![
        ColumnSpec::new("id", "Mã", |r: &FullWarranty| r.warranty.id.as_str().into()),
        ColumnSpec::new("device", "Thiết bị", |r: &FullWarranty| {
            CellValue::opt_text(r.device.as_ref().map(|d| d.device.name.as_str()))
        }),
        ColumnSpec::new("supplier", "Nhà cung cấp", |r: &FullWarranty| {
            CellValue::opt_text(r.supplier.as_ref().map(|s| s.name.as_str()))
        }),
        ColumnSpec::new("startDate", "Ngày bắt đầu", |r: &FullWarranty| {
            r.warranty.start_date.as_str().into()
        })
        .render_with(|r: &FullWarranty| {
            view! { <span>{format_date(&r.warranty.start_date)}</span> }.into_any()
        }),
        ColumnSpec::new("endDate", "Ngày kết thúc", |r: &FullWarranty| {
            r.warranty.end_date.as_str().into()
        })
        .render_with(|r: &FullWarranty| {
            view! { <span>{format_date(&r.warranty.end_date)}</span> }.into_any()
        }),
        ColumnSpec::new("conditions", "Điều kiện", |r: &FullWarranty| {
            r.warranty.conditions.as_str().into()
        }),
        ColumnSpec::new("state", "Hiệu lực", move |r: &FullWarranty| {
            warranty_state(&r.warranty, today).into()
        })
        .render_with(move |r: &FullWarranty| {
            view! { <StatusBadge status=warranty_state(&r.warranty, today) /> }.into_any()
        }),
    ]
}

#[component]
pub fn WarrantyListPage() -> impl IntoView {
    let store = use_store();
    let vm = CrudViewModel::<Warranty>::new();

    let rows = Signal::derive(move || store.projections().warranties.clone());
    let mut columns = warranty_columns(today());
    columns.push(delete_column(vm, |r: &FullWarranty| r.warranty.id.clone()));

    view! {
        <PageFrame page_id="a007_warranty--list" category=PAGE_CAT_LIST>
            <PageHeader title=Warranty::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm bảo hành"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="conditions"
                    search_placeholder="Tìm theo điều kiện..."
                    on_row_click=Callback::new(move |r: FullWarranty| vm.open_edit(r.warranty))
                />
            </div>

            <WarrantyDetails vm=vm />
            <ConfirmDialog
                open=vm.confirm_open
                message=Signal::derive(move || vm.delete_message())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{visible_rows, SortState};
    use store::AssetStore;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_search_by_conditions() {
        let rows = AssetStore::seeded().unwrap().projections().warranties.clone();
        let found = visible_rows(
            &rows,
            &warranty_columns(day("2024-06-01")),
            Some("conditions"),
            "24 tháng",
            &SortState::default(),
        );
        let ids: Vec<&str> = found.iter().map(|r| r.warranty.id.as_str()).collect();
        assert_eq!(ids, vec!["W002", "W003", "W005"]);
    }

    #[test]
    fn test_warranty_state() {
        let rows = AssetStore::seeded().unwrap().projections().warranties.clone();
        assert_eq!(warranty_state(&rows[0].warranty, day("2024-06-01")), "hết hạn");
        assert_eq!(warranty_state(&rows[3].warranty, day("2024-06-01")), "còn hạn");
    }
}
