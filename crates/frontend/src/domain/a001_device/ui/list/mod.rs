use crate::domain::a001_device::ui::details::DeviceDetails;
use crate::shared::components::table::TableCellMoney;
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
use contracts::domain::a001_device::aggregate::{Device, FullDevice};
use contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Колонки таблицы устройств
pub fn device_columns() -> Vec<ColumnSpec<FullDevice>> {
    vec![
        ColumnSpec::new("id", "Mã", |r: &FullDevice| r.device.id.as_str().into()),
        ColumnSpec::new("name", "Tên thiết bị", |r: &FullDevice| {
            r.device.name.as_str().into()
        }),
        ColumnSpec::new("value", "Giá trị", |r: &FullDevice| r.device.value.into()).render_with(
            |r: &FullDevice| view! { <TableCellMoney value=r.device.value /> }.into_any(),
        ),
        ColumnSpec::new("purchaseDate", "Ngày mua", |r: &FullDevice| {
            r.device.purchase_date.as_str().into()
        })
        .render_with(|r: &FullDevice| {
            view! { <span>{format_date(&r.device.purchase_date)}</span> }.into_any()
        }),
        ColumnSpec::new("deviceType", "Loại thiết bị", |r: &FullDevice| {
            CellValue::opt_text(r.device_type.as_ref().map(|t| t.name.as_str()))
        }),
        ColumnSpec::new("deviceLocation", "Vị trí", |r: &FullDevice| {
            CellValue::opt_text(r.device_location.as_ref().map(|l| l.name.as_str()))
        }),
        ColumnSpec::new("deviceStatus", "Trạng thái", |r: &FullDevice| {
            CellValue::opt_text(r.device_status.as_ref().map(|s| s.name.as_str()))
        }),
        ColumnSpec::new("employee", "Người quản lý", |r: &FullDevice| {
            CellValue::opt_text(r.employee.as_ref().map(|e| e.name.as_str()))
        }),
    ]
}

#[component]
pub fn DeviceListPage() -> impl IntoView {
    let store = use_store();
    let vm = CrudViewModel::<Device>::new();

    let rows = Signal::derive(move || store.projections().devices.clone());
    let mut columns = device_columns();
    columns.push(delete_column(vm, |r: &FullDevice| r.device.id.clone()));

    view! {
        <PageFrame page_id="a001_device--list" category=PAGE_CAT_LIST>
            <PageHeader title=Device::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm thiết bị"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="name"
                    search_placeholder="Tìm kiếm thiết bị..."
                    on_row_click=Callback::new(move |r: FullDevice| vm.open_edit(r.device))
                />
            </div>

            <DeviceDetails vm=vm />
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

    fn seed_rows() -> Vec<FullDevice> {
        AssetStore::seeded().unwrap().projections().devices.clone()
    }

    #[test]
    fn test_search_by_name() {
        let rows = seed_rows();
        let found = visible_rows(
            &rows,
            &device_columns(),
            Some("name"),
            "máy in",
            &SortState::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].device.id, "D002");
    }

    #[test]
    fn test_sort_by_value_descending() {
        let rows = seed_rows();
        let mut sort = SortState::default();
        sort.toggle("value");
        sort.toggle("value");

        let sorted = visible_rows(&rows, &device_columns(), Some("name"), "", &sort);
        assert_eq!(sorted.len(), 5);
        assert_eq!(sorted[0].device.id, "D005");
        assert_eq!(sorted[0].device.value, 35_000_000.0);
    }

    #[test]
    fn test_sort_by_device_type_uses_vietnamese_alphabet() {
        let rows = seed_rows();
        let mut sort = SortState::default();
        sort.toggle("deviceType");

        let sorted = visible_rows(&rows, &device_columns(), None, "", &sort);
        let ids: Vec<&str> = sorted.iter().map(|r| r.device.id.as_str()).collect();
        // "Điều hòa" раньше всех "Máy ..."
        assert_eq!(ids, vec!["D004", "D002", "D005", "D003", "D001"]);
    }

    #[test]
    fn test_unresolved_owner_is_empty_cell() {
        let mut rows = seed_rows();
        rows[0].employee = None;
        let columns = device_columns();
        let owner = columns.iter().find(|c| c.key == "employee").unwrap();
        assert_eq!(owner.value(&rows[0]), CellValue::Empty);
    }
}
