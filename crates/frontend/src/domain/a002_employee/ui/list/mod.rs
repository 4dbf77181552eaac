use crate::domain::a002_employee::ui::details::EmployeeDetails;
use crate::shared::components::PageHeader;
use crate::shared::crud::{delete_column, CrudViewModel};
use crate::shared::data_table::{ColumnSpec, DataTable};
use crate::shared::form_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::CellValue;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::use_store;
use contracts::domain::a002_employee::aggregate::{Employee, FullEmployee};
use contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

pub fn employee_columns() -> Vec<ColumnSpec<FullEmployee>> {
    vec![
        ColumnSpec::new("id", "Mã", |r: &FullEmployee| r.employee.id.as_str().into()),
        ColumnSpec::new("name", "Họ tên", |r: &FullEmployee| r.employee.name.as_str().into()),
        ColumnSpec::new("phone", "Số điện thoại", |r: &FullEmployee| {
            r.employee.phone.as_str().into()
        }),
        ColumnSpec::new("email", "Email", |r: &FullEmployee| r.employee.email.as_str().into()),
        ColumnSpec::new("position", "Chức vụ", |r: &FullEmployee| {
            CellValue::opt_text(r.position.as_ref().map(|p| p.name.as_str()))
        }),
        ColumnSpec::new("department", "Phòng ban", |r: &FullEmployee| {
            CellValue::opt_text(r.department.as_ref().map(|d| d.name.as_str()))
        }),
    ]
}

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let store = use_store();
    let vm = CrudViewModel::<Employee>::new();

    let rows = Signal::derive(move || store.projections().employees.clone());
    let mut columns = employee_columns();
    columns.push(delete_column(vm, |r: &FullEmployee| r.employee.id.clone()));

    view! {
        <PageFrame page_id="a002_employee--list" category=PAGE_CAT_LIST>
            <PageHeader title=Employee::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm nhân viên"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="name"
                    search_placeholder="Tìm kiếm nhân viên..."
                    on_row_click=Callback::new(move |r: FullEmployee| vm.open_edit(r.employee))
                />
            </div>

            <EmployeeDetails vm=vm />
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
    fn test_sort_by_name_twice_reverses() {
        let rows = AssetStore::seeded().unwrap().projections().employees.clone();
        let columns = employee_columns();
        let mut sort = SortState::default();

        sort.toggle("name");
        let ascending = visible_rows(&rows, &columns, Some("name"), "", &sort);
        sort.toggle("name");
        let descending = visible_rows(&rows, &columns, Some("name"), "", &sort);

        let asc_ids: Vec<&str> = ascending.iter().map(|r| r.employee.id.as_str()).collect();
        let mut desc_ids: Vec<&str> = descending.iter().map(|r| r.employee.id.as_str()).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);
    }
}
