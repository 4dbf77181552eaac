use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::store_context::use_store;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a009_reference::aggregate::{Department, Position};
use leptos::prelude::*;

#[component]
pub fn EmployeeDetails(vm: CrudViewModel<Employee>) -> impl IntoView {
    let store = use_store();
    let positions = store.options::<Position>(|p| p.name.clone());
    let departments = store.options::<Department>(|d| d.name.clone());

    let field = move |get: fn(&Employee) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
        >
            <Input
                label="Mã nhân viên"
                value=field(|e| e.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|e| e.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Input
                label="Họ tên"
                value=field(|e| e.name.clone())
                on_input=Callback::new(move |v: String| vm.edit(|e| e.name = v))
                required=true
            />
            <Input
                label="Số điện thoại"
                input_type="tel"
                value=field(|e| e.phone.clone())
                on_input=Callback::new(move |v: String| vm.edit(|e| e.phone = v))
                required=true
            />
            <Input
                label="Email"
                input_type="email"
                value=field(|e| e.email.clone())
                on_input=Callback::new(move |v: String| vm.edit(|e| e.email = v))
                required=true
            />
            <Select
                label="Chức vụ"
                value=field(|e| e.position_id.clone())
                options=positions
                placeholder="Chọn chức vụ"
                on_change=Callback::new(move |v: String| vm.edit(|e| e.position_id = v))
            />
            <Select
                label="Phòng ban"
                value=field(|e| e.department_id.clone())
                options=departments
                placeholder="Chọn phòng ban"
                on_change=Callback::new(move |v: String| vm.edit(|e| e.department_id = v))
            />
        </FormDialog>
    }
}
