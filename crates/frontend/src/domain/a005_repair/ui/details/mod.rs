use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::store_context::use_store;
use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a005_repair::aggregate::Repair;
use contracts::domain::a009_reference::aggregate::{ContractType, Supplier};
use contracts::enums::RepairStatus;
use leptos::prelude::*;

#[component]
pub fn RepairDetails(vm: CrudViewModel<Repair>) -> impl IntoView {
    let store = use_store();
    let devices = store.options::<Device>(|d| d.name.clone());
    let employees = store.options::<Employee>(|e| e.name.clone());
    let contract_types = store.options::<ContractType>(|c| c.name.clone());
    let suppliers = store.options::<Supplier>(|s| s.name.clone());
    let statuses = Signal::derive(|| {
        RepairStatus::all()
            .into_iter()
            .map(|s| (s.display_name().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let field = move |get: fn(&Repair) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
        >
            <Input
                label="Mã sửa chữa"
                value=field(|r| r.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|r| r.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Select
                label="Thiết bị"
                value=field(|r| r.device_id.clone())
                options=devices
                placeholder="Chọn thiết bị"
                on_change=Callback::new(move |v: String| vm.edit(|r| r.device_id = v))
                required=true
            />
            <Input
                label="Ngày sửa chữa"
                input_type="date"
                value=field(|r| r.repair_date.clone())
                on_input=Callback::new(move |v: String| vm.edit(|r| r.repair_date = v))
                required=true
            />
            <Textarea
                label="Ghi chú"
                value=field(|r| r.notes.clone())
                on_input=Callback::new(move |v: String| vm.edit(|r| r.notes = v))
            />
            <NumberInput
                label="Chi phí (VND)"
                value=Signal::derive(move || vm.form.with(|r| r.cost))
                on_change=Callback::new(move |v: f64| vm.edit(|r| r.cost = v))
            />
            <Select
                label="Loại hợp đồng"
                value=field(|r| r.contract_type_id.clone())
                options=contract_types
                placeholder="Chọn loại hợp đồng"
                on_change=Callback::new(move |v: String| vm.edit(|r| r.contract_type_id = v))
            />
            <Select
                label="Nhà cung cấp"
                value=field(|r| r.supplier_id.clone())
                options=suppliers
                placeholder="Chọn nhà cung cấp"
                on_change=Callback::new(move |v: String| vm.edit(|r| r.supplier_id = v))
            />
            <Select
                label="Người phụ trách"
                value=field(|r| r.employee_id.clone())
                options=employees
                placeholder="Chọn người phụ trách"
                on_change=Callback::new(move |v: String| vm.edit(|r| r.employee_id = v))
                required=true
            />
            <Select
                label="Trạng thái"
                value=field(|r| r.status.display_name().to_string())
                options=statuses
                on_change=Callback::new(move |v: String| {
                    if let Some(status) = RepairStatus::from_display(&v) {
                        vm.edit(|r| r.status = status);
                    }
                })
            />
        </FormDialog>
    }
}
