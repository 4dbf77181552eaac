//! Главная страница: показатели по разделам и срочные работы

use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::date_utils::{format_date, today};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::store_context::use_store;
use leptos::prelude::*;
use store::dashboards::d400_overview::{DashboardSummary, UrgentItem};
use thaw::*;

/// Таблица срочных работ; пустой список показывает `empty_text`
#[component]
fn UrgentList(
    title: &'static str,
    date_header: &'static str,
    empty_text: &'static str,
    #[prop(into)] items: Signal<Vec<UrgentItem>>,
) -> impl IntoView {
    view! {
        <div class="dashboard-card">
            <h2 class="dashboard-card__title">{title}</h2>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=80.0>"Mã"</TableHeaderCell>
                        <TableHeaderCell min_width=200.0>"Thiết bị"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{date_header}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="3" attr:class="data-table__empty">
                                        {empty_text}
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|item| {
                                view! {
                                    <TableRow>
                                        <TableCell>{item.record_id}</TableCell>
                                        <TableCell>{item.device_name}</TableCell>
                                        <TableCell>{format_date(&item.date)}</TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let store = use_store();
    let limit = store.ui().dashboard_urgent_limit;

    let summary = Memo::new(move |_| {
        store
            .store
            .with(|s| DashboardSummary::compute(s, today(), limit))
    });
    let count = move |f: fn(&DashboardSummary) -> usize| Signal::derive(move || summary.with(f));

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Tổng quan" subtitle="Tình trạng thiết bị văn phòng">
                {()}
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Thiết bị" icon_name="device" href="/devices" value=count(|s| s.devices) />
                    <StatCard label="Nhân viên" icon_name="employees" href="/employees" value=count(|s| s.employees) />
                    <StatCard label="Bảo trì" icon_name="maintenance" href="/maintenance" value=count(|s| s.maintenances) />
                    <StatCard
                        label="Chưa bảo trì"
                        icon_name="alert"
                        href="/maintenance"
                        value=count(|s| s.maintenances_pending)
                        tone=StatTone::Warning
                    />
                    <StatCard label="Kiểm kê" icon_name="inventory" href="/inventory" value=count(|s| s.inventories) />
                    <StatCard label="Sửa chữa" icon_name="repairs" href="/repairs" value=count(|s| s.repairs) />
                    <StatCard
                        label="Chưa sửa chữa"
                        icon_name="alert"
                        href="/repairs"
                        value=count(|s| s.repairs_pending)
                        tone=StatTone::Error
                    />
                    <StatCard label="Hóa đơn" icon_name="invoices" href="/invoices" value=count(|s| s.invoices) />
                    <StatCard label="Bảo hành" icon_name="warranty" href="/warranty" value=count(|s| s.warranties) />
                    <StatCard
                        label="Hết hạn bảo hành"
                        icon_name="alert"
                        href="/warranty"
                        value=count(|s| s.warranties_expired)
                        tone=StatTone::Warning
                    />
                    <StatCard label="Lịch sử sửa chữa" icon_name="history" href="/repair-history" value=count(|s| s.repair_histories) />
                </div>

                <div class="dashboard-grid">
                    <UrgentList
                        title="Thiết bị cần bảo trì gấp"
                        date_header="Ngày bảo trì"
                        empty_text="Không có thiết bị nào cần bảo trì gấp"
                        items=Signal::derive(move || summary.with(|s| s.urgent_maintenances.clone()))
                    />
                    <UrgentList
                        title="Thiết bị cần sửa chữa"
                        date_header="Ngày sửa chữa"
                        empty_text="Không có thiết bị nào cần sửa chữa"
                        items=Signal::derive(move || summary.with(|s| s.urgent_repairs.clone()))
                    />
                </div>
            </div>
        </PageFrame>
    }
}
