use crate::domain::a003_maintenance::ui::details::MaintenanceDetails;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::PageHeader;
use crate::shared::crud::{delete_column, CrudViewModel};
use crate::shared::data_table::{ColumnSpec, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::form_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::CellValue;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::use_store;
use contracts::domain::a003_maintenance::aggregate::{FullMaintenance, Maintenance};
use contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

pub fn maintenance_columns() -> Vec<ColumnSpec<FullMaintenance>> {
    vec![
        ColumnSpec::new("id", "Mã", |r: &FullMaintenance| r.maintenance.id.as_str().into()),
        ColumnSpec::new("device", "Thiết bị", |r: &FullMaintenance| {
            CellValue::opt_text(r.device.as_ref().map(|d| d.device.name.as_str()))
        }),
        ColumnSpec::new("date", "Ngày bảo trì", |r: &FullMaintenance| {
            r.maintenance.date.as_str().into()
        })
        .render_with(|r: &FullMaintenance| {
            view! { <span>{format_date(&r.maintenance.date)}</span> }.into_any()
        }),
        ColumnSpec::new("frequency", "Tần suất", |r: &FullMaintenance| {
            r.maintenance.frequency.as_str().into()
        }),
        ColumnSpec::new("content", "Nội dung", |r: &FullMaintenance| {
            r.maintenance.content.as_str().into()
        }),
        ColumnSpec::new("status", "Trạng thái", |r: &FullMaintenance| {
            r.maintenance.status.display_name().into()
        })
        .render_with(|r: &FullMaintenance| {
            view! { <StatusBadge status=r.maintenance.status.display_name() /> }.into_any()
        }),
    ]
}

#[component]
pub fn MaintenanceListPage() -> impl IntoView {
    let store = use_store();
    let vm = CrudViewModel::<Maintenance>::new();

    let rows = Signal::derive(move || store.projections().maintenances.clone());
    let mut columns = maintenance_columns();
    columns.push(delete_column(vm, |r: &FullMaintenance| r.maintenance.id.clone()));

    view! {
        <PageFrame page_id="a003_maintenance--list" category=PAGE_CAT_LIST>
            <PageHeader title=Maintenance::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm lịch bảo trì"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="content"
                    search_placeholder="Tìm theo nội dung..."
                    on_row_click=Callback::new(move |r: FullMaintenance| vm.open_edit(r.maintenance))
                />
            </div>

            <MaintenanceDetails vm=vm />
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

    #[test]
    fn test_search_by_content() {
        let rows = AssetStore::seeded().unwrap().projections().maintenances.clone();
        let found = visible_rows(
            &rows,
            &maintenance_columns(),
            Some("content"),
            "ĐIỀU HÒA",
            &SortState::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].maintenance.id, "M004");
    }
}
