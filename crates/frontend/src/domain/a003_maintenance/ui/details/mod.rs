use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::store_context::use_store;
use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a003_maintenance::aggregate::Maintenance;
use contracts::enums::MaintenanceStatus;
use leptos::prelude::*;

/// Варианты частоты обслуживания
const FREQUENCIES: [&str; 4] = ["1 tháng", "3 tháng", "6 tháng", "12 tháng"];

#[component]
pub fn MaintenanceDetails(vm: CrudViewModel<Maintenance>) -> impl IntoView {
    let store = use_store();
    let devices = store.options::<Device>(|d| d.name.clone());
    let frequencies = Signal::derive(|| {
        FREQUENCIES
            .iter()
            .map(|f| (f.to_string(), f.to_string()))
            .collect::<Vec<_>>()
    });
    let statuses = Signal::derive(|| {
        MaintenanceStatus::all()
            .into_iter()
            .map(|s| (s.display_name().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let field = move |get: fn(&Maintenance) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
        >
            <Input
                label="Mã bảo trì"
                value=field(|m| m.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|m| m.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Select
                label="Thiết bị"
                value=field(|m| m.device_id.clone())
                options=devices
                placeholder="Chọn thiết bị"
                on_change=Callback::new(move |v: String| vm.edit(|m| m.device_id = v))
                required=true
            />
            <Input
                label="Ngày bảo trì"
                input_type="date"
                value=field(|m| m.date.clone())
                on_input=Callback::new(move |v: String| vm.edit(|m| m.date = v))
                required=true
            />
            <Select
                label="Tần suất"
                value=field(|m| m.frequency.clone())
                options=frequencies
                placeholder="Chọn tần suất"
                on_change=Callback::new(move |v: String| vm.edit(|m| m.frequency = v))
            />
            <Textarea
                label="Nội dung"
                value=field(|m| m.content.clone())
                on_input=Callback::new(move |v: String| vm.edit(|m| m.content = v))
            />
            <Select
                label="Trạng thái"
                value=field(|m| m.status.display_name().to_string())
                options=statuses
                on_change=Callback::new(move |v: String| {
                    if let Some(status) = MaintenanceStatus::from_display(&v) {
                        vm.edit(|m| m.status = status);
                    }
                })
            />
        </FormDialog>
    }
}
