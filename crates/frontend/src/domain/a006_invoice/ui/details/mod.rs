use crate::shared::components::table::{format_quantity, format_vnd, TableCellMoney};
use crate::shared::components::ui::{Input, NumberInput, Select, StatusBadge};
use crate::shared::crud::CrudViewModel;
use crate::shared::form_dialog::FormDialog;
use crate::shared::icons::icon;
use crate::shared::store_context::{use_store, StoreContext};
use crate::shared::toast::{use_notifications, NotificationService};
use crate::domain::a006_invoice::ui::list::payment_status;
use contracts::domain::a005_repair::aggregate::Repair;
use contracts::domain::a006_invoice::aggregate::{Invoice, InvoiceDetail};
use leptos::prelude::*;
use thaw::*;

/// Строка детализации из полей ввода; количество и цена по умолчанию 1 и 0
pub fn build_detail_line(
    id: String,
    invoice_id: String,
    name: &str,
    quantity: &str,
    unit_price: &str,
) -> InvoiceDetail {
    let quantity: f64 = quantity.trim().parse().unwrap_or(1.0);
    let unit_price: f64 = unit_price.trim().parse().unwrap_or(0.0);
    InvoiceDetail {
        id,
        name: name.trim().to_string(),
        quantity,
        unit_price,
        total: quantity * unit_price,
        invoice_id,
    }
}

fn add_line(store: StoreContext, notify: NotificationService, line: InvoiceDetail) -> bool {
    let result = store.store.try_update(|s| s.create(line));
    match result {
        Some(Err(e)) => {
            log::warn!("Invoice line not added: {}", e);
            notify.error("Lỗi", Some(e.to_string()));
            false
        }
        _ => true,
    }
}

fn remove_line(store: StoreContext, notify: NotificationService, id: String) {
    if let Some(Err(e)) = store
        .store
        .try_update(|s| s.delete::<InvoiceDetail>(&id).map(|_| ()))
    {
        log::warn!("Invoice line {} not removed: {}", id, e);
        notify.error("Lỗi", Some(e.to_string()));
    }
}

/// Строки детализации счёта с добавлением и удалением
#[component]
fn InvoiceDetailLines(#[prop(into)] invoice_id: Signal<String>) -> impl IntoView {
    let store = use_store();
    let notify = use_notifications();

    let lines = Signal::derive(move || {
        let id = invoice_id.get();
        store.store.with(|s| {
            s.list::<InvoiceDetail>()
                .into_iter()
                .filter(|d| d.invoice_id == id)
                .collect::<Vec<_>>()
        })
    });
    let lines_total = Signal::derive(move || lines.with(|l| l.iter().map(|d| d.total).sum::<f64>()));

    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_string());
    let unit_price = RwSignal::new(String::new());

    let on_add = move |_| {
        let line = build_detail_line(
            store.store.with_untracked(|s| s.next_id::<InvoiceDetail>()),
            invoice_id.get_untracked(),
            &name.get_untracked(),
            &quantity.get_untracked(),
            &unit_price.get_untracked(),
        );
        if add_line(store, notify, line) {
            name.set(String::new());
            quantity.set("1".to_string());
            unit_price.set(String::new());
        }
    };

    view! {
        <div class="invoice-lines">
            <h3 class="invoice-lines__title">"Chi tiết hóa đơn"</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Hạng mục"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>"SL"</TableHeaderCell>
                        <TableHeaderCell>"Đơn giá"</TableHeaderCell>
                        <TableHeaderCell>"Thành tiền"</TableHeaderCell>
                        <TableHeaderCell min_width=40.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || lines.get()
                        key=|d| (d.id.clone(), d.total.to_bits())
                        children=move |d| {
                            let id = d.id.clone();
                            view! {
                                <TableRow>
                                    <TableCell>{d.name.clone()}</TableCell>
                                    <TableCell>{format_quantity(d.quantity)}</TableCell>
                                    <TableCell><TableCellMoney value=d.unit_price /></TableCell>
                                    <TableCell><TableCellMoney value=d.total /></TableCell>
                                    <TableCell>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Xóa"
                                            on:click=move |_| remove_line(store, notify, id.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <div class="invoice-lines__total">
                "Tổng theo chi tiết: " {move || format_vnd(lines_total.get())}
            </div>

            <div class="invoice-lines__add">
                <Input
                    label="Hạng mục"
                    value=name
                    on_input=Callback::new(move |v: String| name.set(v))
                />
                <Input
                    label="Số lượng"
                    input_type="number"
                    value=quantity
                    on_input=Callback::new(move |v: String| quantity.set(v))
                />
                <Input
                    label="Đơn giá"
                    input_type="number"
                    value=unit_price
                    on_input=Callback::new(move |v: String| unit_price.set(v))
                />
                <button class="button button--secondary" type="button" on:click=on_add>
                    {icon("plus")}
                    "Thêm hạng mục"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn InvoiceDetails(vm: CrudViewModel<Invoice>) -> impl IntoView {
    let store = use_store();
    let repairs = store.options::<Repair>(|r| format!("{} - {}", r.id, r.notes));

    let field = move |get: fn(&Invoice) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <FormDialog
            open=vm.open
            title=Signal::derive(move || vm.title())
            busy=vm.busy
            on_submit=Callback::new(move |_| vm.submit())
            on_cancel=Callback::new(move |_| vm.close())
            after_form=move || {
                view! {
                    <Show when=move || vm.is_edit()>
                        <InvoiceDetailLines invoice_id=field(|i| i.id.clone()) />
                    </Show>
                }
            }
        >
            <Input
                label="Mã hóa đơn"
                value=field(|i| i.id.clone())
                on_input=Callback::new(move |v: String| vm.edit(|i| i.id = v))
                disabled=Signal::derive(move || vm.is_edit())
                required=true
            />
            <Input
                label="Ngày lập"
                input_type="date"
                value=field(|i| i.date.clone())
                on_input=Callback::new(move |v: String| vm.edit(|i| i.date = v))
                required=true
            />
            <Input
                label="Nội dung"
                value=field(|i| i.content.clone())
                on_input=Callback::new(move |v: String| vm.edit(|i| i.content = v))
                required=true
            />
            <Select
                label="Phiếu sửa chữa"
                value=field(|i| i.repair_id.clone())
                options=repairs
                placeholder="Chọn phiếu sửa chữa"
                on_change=Callback::new(move |v: String| vm.edit(|i| i.repair_id = v))
                required=true
            />
            <NumberInput
                label="Tổng tiền (VND)"
                value=Signal::derive(move || vm.form.with(|i| i.total))
                on_change=Callback::new(move |v: f64| vm.edit(|i| i.total = v))
            />
            <Show when=move || vm.is_edit()>
                <div class="form__group">
                    {move || view! { <StatusBadge status=vm.form.with(payment_status) /> }}
                </div>
            </Show>
        </FormDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::ToastKind;
    use store::shared::config::AppConfig;
    use store::AssetStore;

    #[test]
    fn test_build_detail_line() {
        let line = build_detail_line(
            "ID005".to_string(),
            "IV001".to_string(),
            " Chuột không dây ",
            "2",
            "250000",
        );
        assert_eq!(line.name, "Chuột không dây");
        assert_eq!(line.total, 500_000.0);
        assert_eq!(line.invoice_id, "IV001");

        let defaults = build_detail_line("ID006".to_string(), "IV001".to_string(), "Công", "", "x");
        assert_eq!(defaults.quantity, 1.0);
        assert_eq!(defaults.total, 0.0);
    }

    #[test]
    fn test_add_line_changes_only_detail_lines() {
        let owner = Owner::new();
        owner.with(|| {
            let store = StoreContext::new(AssetStore::seeded().unwrap(), AppConfig::default());
            let notify = NotificationService::new(0);
            let invoice = store.store.with_untracked(|s| s.get::<Invoice>("IV001")).unwrap();
            let lines = move || store.store.with_untracked(|s| s.list::<InvoiceDetail>().len());
            let before = lines();

            let id = store.store.with_untracked(|s| s.next_id::<InvoiceDetail>());
            let line = build_detail_line(id, "IV001".to_string(), "Quạt tản nhiệt", "1", "150000");
            assert!(add_line(store, notify, line.clone()));
            assert_eq!(lines(), before + 1);
            assert!(notify.toasts().is_empty());
            // сам счёт не сохраняется вместе со строкой
            assert_eq!(store.store.with_untracked(|s| s.get::<Invoice>("IV001")).unwrap(), invoice);

            assert!(!add_line(store, notify, line));
            assert_eq!(lines(), before + 1);
            assert_eq!(notify.toasts()[0].kind, ToastKind::Error);
        });
    }
}
