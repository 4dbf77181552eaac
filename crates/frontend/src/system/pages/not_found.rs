use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__text">"Không tìm thấy trang"</p>
                <A href="/">"Về trang tổng quan"</A>
            </div>
        </PageFrame>
    }
}
