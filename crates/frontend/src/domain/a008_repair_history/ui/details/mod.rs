use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::store_context::use_store;
use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a008_repair_history::aggregate::RepairHistory;
use contracts::domain::a009_reference::aggregate::ContractType;
use leptos::prelude::*;

#[component]
pub fn RepairHistoryDetails(vm: CrudViewModel<RepairHistory>) -> impl IntoView {
    let store = use_store();
    let devices = store.options::<Device>(|d| d.name.clone());
    let employees = store.options::<Employee>(|e| e.name.clone());
    let contract_types = store.options::<ContractType>(|c| c.name.clone());

    let field =
        move |get: fn(&RepairHistory) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
        >
            <Input
                label="Mã lịch sử"
                value=field(|h| h.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|h| h.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Select
                label="Thiết bị"
                value=field(|h| h.device_id.clone())
                options=devices
                placeholder="Chọn thiết bị"
                on_change=Callback::new(move |v: String| vm.edit(|h| h.device_id = v))
                required=true
            />
            <Select
                label="Loại hợp đồng"
                value=field(|h| h.contract_type_id.clone())
                options=contract_types
                placeholder="Chọn loại hợp đồng"
                on_change=Callback::new(move |v: String| vm.edit(|h| h.contract_type_id = v))
            />
            <Select
                label="Người thực hiện"
                value=field(|h| h.employee_id.clone())
                options=employees
                placeholder="Chọn người thực hiện"
                on_change=Callback::new(move |v: String| vm.edit(|h| h.employee_id = v))
                required=true
            />
            <Textarea
                label="Ghi chú"
                value=field(|h| h.notes.clone())
                on_input=Callback::new(move |v: String| vm.edit(|h| h.notes = v))
                required=true
            />
        </FormDialog>
    }
}
