use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::store_context::StoreContext;
use crate::shared::toast::NotificationService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Panel visibility for the whole app
    provide_context(AppGlobalContext::new());

    // Единое хранилище данных и конфигурация
    let store = StoreContext::init();
    provide_context(store);

    provide_context(NotificationService::new(store.ui().toast_duration_ms));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
