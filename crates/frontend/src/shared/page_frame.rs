//! PageFrame — standard root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"a001_device--list"`)
//! and `data-page-category` on the root element.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=base_class data-page-category=category>
            {children()}
        </div>
    }
}
