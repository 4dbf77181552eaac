use crate::shared::components::ui::{Input, NumberInput, Select};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::store_context::use_store;
use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a009_reference::aggregate::{DeviceLocation, DeviceStatus, DeviceType};
use leptos::prelude::*;

/// Форма устройства
#[component]
pub fn DeviceDetails(vm: CrudViewModel<Device>) -> impl IntoView {
    let store = use_store();
    let device_types = store.options::<DeviceType>(|t| t.name.clone());
    let locations = store.options::<DeviceLocation>(|l| l.name.clone());
    let statuses = store.options::<DeviceStatus>(|s| s.name.clone());
    let employees = store.options::<Employee>(|e| e.name.clone());

    let field = move |get: fn(&Device) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
        >
            <Input
                label="Mã thiết bị"
                value=field(|d| d.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|d| d.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Input
                label="Tên thiết bị"
                value=field(|d| d.name.clone())
                on_input=Callback::new(move |v: String| vm.edit(|d| d.name = v))
                required=true
            />
            <NumberInput
                label="Giá trị (VND)"
                value=Signal::derive(move || vm.form.with(|d| d.value))
                on_change=Callback::new(move |v: f64| vm.edit(|d| d.value = v))
            />
            <Input
                label="Ngày mua"
                input_type="date"
                value=field(|d| d.purchase_date.clone())
                on_input=Callback::new(move |v: String| vm.edit(|d| d.purchase_date = v))
                required=true
            />
            <Select
                label="Loại thiết bị"
                value=field(|d| d.device_type_id.clone())
                options=device_types
                placeholder="Chọn loại thiết bị"
                on_change=Callback::new(move |v: String| vm.edit(|d| d.device_type_id = v))
                required=true
            />
            <Select
                label="Vị trí"
                value=field(|d| d.device_location_id.clone())
                options=locations
                placeholder="Chọn vị trí"
                on_change=Callback::new(move |v: String| vm.edit(|d| d.device_location_id = v))
                required=true
            />
            <Select
                label="Trạng thái"
                value=field(|d| d.device_status_id.clone())
                options=statuses
                placeholder="Chọn trạng thái"
                on_change=Callback::new(move |v: String| vm.edit(|d| d.device_status_id = v))
                required=true
            />
            <Select
                label="Người quản lý"
                value=field(|d| d.employee_id.clone())
                options=employees
                placeholder="Chọn người quản lý"
                on_change=Callback::new(move |v: String| vm.edit(|d| d.employee_id = v))
                required=true
            />
        </FormDialog>
    }
}
