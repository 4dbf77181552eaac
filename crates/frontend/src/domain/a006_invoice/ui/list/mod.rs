use crate::domain::a006_invoice::ui::details::InvoiceDetails;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::PageHeader;
use crate::shared::crud::{delete_column, CrudViewModel};
use crate::shared::data_table::{ColumnSpec, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::form_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::CellValue;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::store_context::{use_store, StoreContext};
use crate::shared::toast::{use_notifications, NotificationService};
use contracts::domain::a006_invoice::aggregate::{FullInvoice, Invoice};
use contracts::domain::common::Record;
use leptos::prelude::*;
use store::usecases::u501_pay_invoice::pay_invoice;
use thaw::{Button, ButtonAppearance};

pub fn payment_status(invoice: &Invoice) -> &'static str {
    if invoice.paid {
        "đã thanh toán"
    } else {
        "chưa thanh toán"
    }
}

pub fn invoice_columns() -> Vec<ColumnSpec<FullInvoice>> {
    vec![
        ColumnSpec::new("id", "Mã hóa đơn", |r: &FullInvoice| r.invoice.id.as_str().into()),
        ColumnSpec::new("date", "Ngày lập", |r: &FullInvoice| r.invoice.date.as_str().into())
            .render_with(|r: &FullInvoice| {
                view! { <span>{format_date(&r.invoice.date)}</span> }.into_any()
            }),
        ColumnSpec::new("content", "Nội dung", |r: &FullInvoice| {
            r.invoice.content.as_str().into()
        }),
        ColumnSpec::new("device", "Thiết bị", |r: &FullInvoice| {
            CellValue::opt_text(
                r.repair
                    .as_ref()
                    .and_then(|rep| rep.device.as_ref())
                    .map(|d| d.device.name.as_str()),
            )
        }),
        ColumnSpec::new("details", "Số hạng mục", |r: &FullInvoice| {
            (r.details.len() as f64).into()
        }),
        ColumnSpec::new("total", "Tổng tiền", |r: &FullInvoice| r.invoice.total.into())
            .render_with(|r: &FullInvoice| {
                view! { <TableCellMoney value=r.invoice.total bold=true /> }.into_any()
            }),
        ColumnSpec::new("paid", "Thanh toán", |r: &FullInvoice| {
            payment_status(&r.invoice).into()
        })
        .render_with(|r: &FullInvoice| {
            view! { <StatusBadge status=payment_status(&r.invoice) /> }.into_any()
        }),
    ]
}

/// Оплата счёта с уведомлением о результате
fn pay(store: StoreContext, notify: NotificationService, invoice_id: String) {
    let result = store
        .store
        .try_update(|s| pay_invoice(s, &invoice_id));
    match result {
        Some(Ok(outcome)) => {
            log::info!("Invoice {} paid", outcome.invoice_id);
            let message = outcome
                .history_id
                .map(|id| format!("Đã ghi vào lịch sử sửa chữa: {}", id));
            notify.success(format!("Thanh toán hóa đơn {} thành công", invoice_id), message);
        }
        Some(Err(e)) => {
            log::warn!("Invoice {} not paid: {}", invoice_id, e);
            notify.error("Lỗi", Some(e.to_string()));
        }
        None => {}
    }
}

fn pay_column(store: StoreContext, notify: NotificationService) -> ColumnSpec<FullInvoice> {
    ColumnSpec::new("pay", "", |_: &FullInvoice| CellValue::Empty)
        .unsortable()
        .render_with(move |r: &FullInvoice| {
            if r.invoice.paid {
                return view! { <span class="text-muted">"Đã thanh toán"</span> }.into_any();
            }
            let id = r.invoice.id.clone();
            view! {
                <button
                    class="button button--secondary"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        pay(store, notify, id.clone());
                    }
                >
                    {icon("credit-card")}
                    "Thanh toán"
                </button>
            }
            .into_any()
        })
}

#[component]
pub fn InvoiceListPage() -> impl IntoView {
    let store = use_store();
    let notify = use_notifications();
    let vm = CrudViewModel::<Invoice>::new();

    let rows = Signal::derive(move || store.projections().invoices.clone());
    let mut columns = invoice_columns();
    columns.push(pay_column(store, notify));
    columns.push(delete_column(vm, |r: &FullInvoice| r.invoice.id.clone()));

    view! {
        <PageFrame page_id="a006_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title=Invoice::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Thêm hóa đơn"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    rows=rows
                    columns=columns
                    search_field="content"
                    search_placeholder="Tìm theo nội dung..."
                    on_row_click=Callback::new(move |r: FullInvoice| vm.open_edit(r.invoice))
                />
            </div>

            <InvoiceDetails vm=vm />
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
    fn test_search_by_content() {
        let rows = AssetStore::seeded().unwrap().projections().invoices.clone();
        let found = visible_rows(
            &rows,
            &invoice_columns(),
            Some("content"),
            "máy in",
            &SortState::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].invoice.id, "IV002");
    }

    #[test]
    fn test_payment_status_follows_store() {
        let mut store = AssetStore::seeded().unwrap();
        let before = store.get::<Invoice>("IV001").unwrap();
        assert_eq!(payment_status(&before), "chưa thanh toán");

        pay_invoice(&mut store, "IV001").unwrap();
        let after = store.get::<Invoice>("IV001").unwrap();
        assert_eq!(payment_status(&after), "đã thanh toán");
    }
}
