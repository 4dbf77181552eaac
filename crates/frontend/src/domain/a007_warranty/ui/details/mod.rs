use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::store_context::use_store;
use contracts::domain::a001_device::aggregate::Device;
use contracts::domain::a007_warranty::aggregate::Warranty;
use contracts::domain::a009_reference::aggregate::Supplier;
use leptos::prelude::*;

#[component]
pub fn WarrantyDetails(vm: CrudViewModel<Warranty>) -> impl IntoView {
    let store = use_store();
    let devices = store.options::<Device>(|d| d.name.clone());
    let suppliers = store.options::<Supplier>(|s| s.name.clone());

    let field = move |get: fn(&Warranty) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
        >
            <Input
                label="Mã bảo hành"
                value=field(|w| w.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|w| w.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Select
                label="Thiết bị"
                value=field(|w| w.device_id.clone())
                options=devices
                placeholder="Chọn thiết bị"
                on_change=Callback::new(move |v: String| vm.edit(|w| w.device_id = v))
                required=true
            />
            <Select
                label="Nhà cung cấp"
                value=field(|w| w.supplier_id.clone())
                options=suppliers
                placeholder="Chọn nhà cung cấp"
                on_change=Callback::new(move |v: String| vm.edit(|w| w.supplier_id = v))
                required=true
            />
            <Input
                label="Ngày bắt đầu"
                input_type="date"
                value=field(|w| w.start_date.clone())
                on_input=Callback::new(move |v: String| vm.edit(|w| w.start_date = v))
                required=true
            />
            <Input
                label="Ngày kết thúc"
                input_type="date"
                value=field(|w| w.end_date.clone())
                on_input=Callback::new(move |v: String| vm.edit(|w| w.end_date = v))
                required=true
            />
            <Textarea
                label="Điều kiện bảo hành"
                value=field(|w| w.conditions.clone())
                on_input=Callback::new(move |v: String| vm.edit(|w| w.conditions = v))
            />
        </FormDialog>
    }
}
