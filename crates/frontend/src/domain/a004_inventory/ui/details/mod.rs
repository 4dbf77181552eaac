use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::store_context::use_store;
use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a004_inventory::aggregate::Inventory;
use contracts::enums::DeviceCondition;
use leptos::prelude::*;

#[component]
pub fn InventoryDetails(vm: CrudViewModel<Inventory>) -> impl IntoView {
    let store = use_store();
    let devices = store.options::<Device>(|d| d.name.clone());
    let conditions = Signal::derive(|| {
        DeviceCondition::all()
            .into_iter()
            .map(|c| (c.display_name().to_string(), c.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let field = move |get: fn(&Inventory) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
        >
            <Input
                label="Mã kiểm kê"
                value=field(|i| i.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|i| i.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Select
                label="Thiết bị"
                value=field(|i| i.device_id.clone())
                options=devices
                placeholder="Chọn thiết bị"
                on_change=Callback::new(move |v: String| vm.edit(|i| i.device_id = v))
                required=true
            />
            <Input
                label="Ngày kiểm kê"
                input_type="date"
                value=field(|i| i.check_date.clone())
                on_input=Callback::new(move |v: String| vm.edit(|i| i.check_date = v))
                required=true
            />
            <Select
                label="Tình trạng"
                value=field(|i| i.condition.display_name().to_string())
                options=conditions
                on_change=Callback::new(move |v: String| {
                    if let Some(condition) = DeviceCondition::from_display(&v) {
                        vm.edit(|i| i.condition = condition);
                    }
                })
            />
        </FormDialog>
    }
}
