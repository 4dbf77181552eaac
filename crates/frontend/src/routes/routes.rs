use crate::dashboards::d400_overview::ui::OverviewPage;
use crate::domain::a001_device::ui::list::DeviceListPage;
use crate::domain::a002_employee::ui::list::EmployeeListPage;
use crate::domain::a003_maintenance::ui::list::MaintenanceListPage;
use crate::domain::a004_inventory::ui::list::InventoryListPage;
use crate::domain::a005_repair::ui::list::RepairListPage;
use crate::domain::a006_invoice::ui::list::InvoiceListPage;
use crate::domain::a007_warranty::ui::list::WarrantyListPage;
use crate::domain::a008_repair_history::ui::list::RepairHistoryListPage;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::toast::Toaster;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Пункт навигации: путь, подпись, иконка
pub struct NavRoute {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Все страницы приложения в порядке меню
pub const NAV_ROUTES: &[NavRoute] = &[
    NavRoute { path: "/", label: "Tổng quan", icon: "dashboard" },
    NavRoute { path: "/devices", label: "Thiết bị", icon: "device" },
    NavRoute { path: "/maintenance", label: "Bảo trì", icon: "maintenance" },
    NavRoute { path: "/inventory", label: "Kiểm kê", icon: "inventory" },
    NavRoute { path: "/employees", label: "Nhân viên", icon: "employees" },
    NavRoute { path: "/repairs", label: "Sửa chữa", icon: "repairs" },
    NavRoute { path: "/invoices", label: "Hóa đơn", icon: "invoices" },
    NavRoute { path: "/warranty", label: "Bảo hành", icon: "warranty" },
    NavRoute { path: "/repair-history", label: "Lịch sử sửa chữa", icon: "history" },
];

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any()>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=OverviewPage />
                <Route path=path!("/devices") view=DeviceListPage />
                <Route path=path!("/maintenance") view=MaintenanceListPage />
                <Route path=path!("/inventory") view=InventoryListPage />
                <Route path=path!("/employees") view=EmployeeListPage />
                <Route path=path!("/repairs") view=RepairListPage />
                <Route path=path!("/invoices") view=InvoiceListPage />
                <Route path=path!("/warranty") view=WarrantyListPage />
                <Route path=path!("/repair-history") view=RepairHistoryListPage />
            </Routes>
        </Shell>
        <Toaster />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}
