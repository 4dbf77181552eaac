use crate::domain::a004_inventory::ui::details::InventoryDetails;
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
use contracts::domain::a004_inventory::aggregate::{FullInventory, Inventory};
use contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

pub fn inventory_columns() -> Vec<ColumnSpec<FullInventory>> {
    vec![
        ColumnSpec::new("id", "Mã kiểm kê", |r: &FullInventory| r.inventory.id.as_str().into()),
        ColumnSpec::new("device", "Thiết bị", |r: &FullInventory| {
            CellValue::opt_text(r.device.as_ref().map(|d| d.device.name.as_str()))
        }),
        ColumnSpec::new("location", "Vị trí", |r: &FullInventory| {
            CellValue::opt_text(
                r.device
                    .as_ref()
                    .and_then(|d| d.device_location.as_ref())
                    .map(|l| l.name.as_str()),
            )
        }),
        ColumnSpec::new("checkDate", "Ngày kiểm kê", |r: &FullInventory| {
            r.inventory.check_date.as_str().into()
        })
        .render_with(|r: &FullInventory| {
            view! { <span>{format_date(&r.inventory.check_date)}</span> }.into_any()
        }),
        ColumnSpec::new("condition", "Tình trạng", |r: &FullInventory| {
            r.inventory.condition.display_name().into()
        })
        .render_with(|r: &FullInventory| {
            view! { <StatusBadge status=r.inventory.condition.display_name() /> }.into_any()
        }),
    ]
}

#[component]
pub fn InventoryListPage() -> impl IntoView {
    let store = use_store();
    let vm = CrudViewModel::<Inventory>::new();

    let rows = Signal::derive(move || store.projections().inventories.clone());
    let mut columns = inventory_columns();
    columns.push(delete_column(vm, |r: &FullInventory| r.inventory.id.clone()));

    view! {
        <PageFrame page_id="a004_inventory--list" category=PAGE_CAT_LIST>
            <PageHeader title=Inventory::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm phiếu kiểm kê"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="id"
                    search_placeholder="Tìm theo mã kiểm kê..."
                    on_row_click=Callback::new(move |r: FullInventory| vm.open_edit(r.inventory))
                />
            </div>

            <InventoryDetails vm=vm />
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
    fn test_search_by_id_and_blank_term() {
        let rows = AssetStore::seeded().unwrap().projections().inventories.clone();
        let columns = inventory_columns();

        let found = visible_rows(&rows, &columns, Some("id"), "i003", &SortState::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].inventory.id, "I003");

        let all = visible_rows(&rows, &columns, Some("id"), "   ", &SortState::default());
        assert_eq!(all.len(), rows.len());
    }
}
