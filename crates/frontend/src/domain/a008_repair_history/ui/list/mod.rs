use crate::domain::a008_repair_history::ui::details::RepairHistoryDetails;
use crate::shared::components::PageHeader;
use crate::shared::crud::{delete_column, CrudViewModel};
use crate::shared::data_table::{ColumnSpec, DataTable};
use crate::shared::form_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::CellValue;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::use_store;
use contracts::domain::a008_repair_history::aggregate::{FullRepairHistory, RepairHistory};
use contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

pub fn repair_history_columns() -> Vec<ColumnSpec<FullRepairHistory>> {
    vec![
        ColumnSpec::new("id", "Mã", |r: &FullRepairHistory| r.history.id.as_str().into()),
        ColumnSpec::new("device", "Thiết bị", |r: &FullRepairHistory| {
            CellValue::opt_text(r.device.as_ref().map(|d| d.device.name.as_str()))
        }),
        ColumnSpec::new("contractType", "Loại hợp đồng", |r: &FullRepairHistory| {
            CellValue::opt_text(r.contract_type.as_ref().map(|c| c.name.as_str()))
        }),
        ColumnSpec::new("employee", "Người thực hiện", |r: &FullRepairHistory| {
            CellValue::opt_text(r.employee.as_ref().map(|e| e.employee.name.as_str()))
        }),
        ColumnSpec::new("department", "Phòng ban", |r: &FullRepairHistory| {
            CellValue::opt_text(
                r.employee
                    .as_ref()
                    .and_then(|e| e.department.as_ref())
                    .map(|d| d.name.as_str()),
            )
        }),
        ColumnSpec::new("notes", "Ghi chú", |r: &FullRepairHistory| {
            r.history.notes.as_str().into()
        }),
    ]
}

#[component]
pub fn RepairHistoryListPage() -> impl IntoView {
    let store = use_store();
    let vm = CrudViewModel::<RepairHistory>::new();

    let rows = Signal::derive(move || store.projections().repair_histories.clone());
    let mut columns = repair_history_columns();
    columns.push(delete_column(vm, |r: &FullRepairHistory| r.history.id.clone()));

    view! {
        <PageFrame page_id="a008_repair_history--list" category=PAGE_CAT_LIST>
            <PageHeader title=RepairHistory::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm lịch sử"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="notes"
                    search_placeholder="Tìm theo ghi chú..."
                    on_row_click=Callback::new(move |r: FullRepairHistory| vm.open_edit(r.history))
                />
            </div>

            <RepairHistoryDetails vm=vm />
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
    use store::usecases::u501_pay_invoice::pay_invoice;
    use store::AssetStore;

    #[test]
    fn test_paid_invoice_appears_in_history() {
        let mut store = AssetStore::seeded().unwrap();
        pay_invoice(&mut store, "IV001").unwrap();

        let rows = store.projections().repair_histories.clone();
        let found = visible_rows(
            &rows,
            &repair_history_columns(),
            Some("notes"),
            "thanh toán hóa đơn: iv001",
            &SortState::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].history.id, "RH005");
        assert_eq!(
            found[0].device.as_ref().map(|d| d.device.id.as_str()),
            Some("D001")
        );
    }
}
