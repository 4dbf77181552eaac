use crate::domain::a005_repair::ui::details::RepairDetails;
use crate::shared::components::table::TableCellMoney;
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
use contracts::domain::a005_repair::aggregate::{FullRepair, Repair};
use contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

pub fn repair_columns() -> Vec<ColumnSpec<FullRepair>> {
    vec![
        ColumnSpec::new("id", "Mã", |r: &FullRepair| r.repair.id.as_str().into()),
        ColumnSpec::new("device", "Thiết bị", |r: &FullRepair| {
            CellValue::opt_text(r.device.as_ref().map(|d| d.device.name.as_str()))
        }),
        ColumnSpec::new("repairDate", "Ngày sửa chữa", |r: &FullRepair| {
            r.repair.repair_date.as_str().into()
        })
        .render_with(|r: &FullRepair| {
            view! { <span>{format_date(&r.repair.repair_date)}</span> }.into_any()
        }),
        ColumnSpec::new("notes", "Ghi chú", |r: &FullRepair| r.repair.notes.as_str().into()),
        ColumnSpec::new("cost", "Chi phí", |r: &FullRepair| r.repair.cost.into())
            .render_with(|r: &FullRepair| view! { <TableCellMoney value=r.repair.cost /> }.into_any()),
        ColumnSpec::new("contractType", "Loại hợp đồng", |r: &FullRepair| {
            CellValue::opt_text(r.contract_type.as_ref().map(|c| c.name.as_str()))
        }),
        ColumnSpec::new("supplier", "Nhà cung cấp", |r: &FullRepair| {
            CellValue::opt_text(r.supplier.as_ref().map(|s| s.name.as_str()))
        }),
        ColumnSpec::new("employee", "Người phụ trách", |r: &FullRepair| {
            CellValue::opt_text(r.employee.as_ref().map(|e| e.employee.name.as_str()))
        }),
        ColumnSpec::new("status", "Trạng thái", |r: &FullRepair| {
            r.repair.status.display_name().into()
        })
        .render_with(|r: &FullRepair| {
            view! { <StatusBadge status=r.repair.status.display_name() /> }.into_any()
        }),
    ]
}

#[component]
pub fn RepairListPage() -> impl IntoView {
    let store = use_store();
    let vm = CrudViewModel::<Repair>::new();

    let rows = Signal::derive(move || store.projections().repairs.clone());
    let mut columns = repair_columns();
    columns.push(delete_column(vm, |r: &FullRepair| r.repair.id.clone()));

    view! {
        <PageFrame page_id="a005_repair--list" category=PAGE_CAT_LIST>
            <PageHeader title=Repair::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm phiếu sửa chữa"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="notes"
                    search_placeholder="Tìm theo ghi chú..."
                    on_row_click=Callback::new(move |r: FullRepair| vm.open_edit(r.repair))
                />
            </div>

            <RepairDetails vm=vm />
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
    fn test_sort_by_cost_then_switch_column() {
        let rows = AssetStore::seeded().unwrap().projections().repairs.clone();
        let columns = repair_columns();
        let mut sort = SortState::default();

        sort.toggle("cost");
        let by_cost = visible_rows(&rows, &columns, Some("notes"), "", &sort);
        assert_eq!(by_cost[0].repair.id, "R002");
        assert_eq!(by_cost[4].repair.id, "R005");

        sort.toggle("id");
        let by_id = visible_rows(&rows, &columns, Some("notes"), "", &sort);
        let ids: Vec<&str> = by_id.iter().map(|r| r.repair.id.as_str()).collect();
        assert_eq!(ids, vec!["R001", "R002", "R003", "R004", "R005"]);
    }
}
