//! Sidebar component with collapsible menu groups

use crate::routes::routes::NAV_ROUTES;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Пути страниц группы
    paths: Vec<&'static str>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "devices",
            label: "Thiết bị",
            icon: "device",
            paths: vec!["/devices", "/maintenance", "/inventory", "/warranty"],
        },
        MenuGroup {
            id: "people",
            label: "Nhân sự",
            icon: "employees",
            paths: vec!["/employees"],
        },
        MenuGroup {
            id: "repairs",
            label: "Sửa chữa & thanh toán",
            icon: "repairs",
            paths: vec!["/repairs", "/invoices", "/repair-history"],
        },
    ]
}

/// Активен ли пункт меню для текущего пути
fn is_active(current: &str, path: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current == path || current.starts_with(&format!("{}/", path))
    }
}

#[component]
fn NavItem(path: &'static str, padding: &'static str) -> impl IntoView {
    let location = use_location();
    let Some(route) = NAV_ROUTES.iter().find(|r| r.path == path) else {
        return view! { <></> }.into_any();
    };

    view! {
        <A href=path>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(&location.pathname.get(), path)
                style:padding-left=padding
            >
                <div class="app-sidebar__item-content">
                    {icon(route.icon)}
                    <span>{route.label}</span>
                </div>
            </div>
        </A>
    }
    .into_any()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    // Все группы раскрыты при старте
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            <NavItem path="/" padding="12px" />

            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let paths = StoredValue::new(group.paths.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {paths.get_value().into_iter().map(|path| view! {
                                    <NavItem path=path padding="10px" />
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_in_menu() {
        let grouped: Vec<&str> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.paths)
            .chain(std::iter::once("/"))
            .collect();
        for route in NAV_ROUTES {
            assert!(grouped.contains(&route.path), "{} missing", route.path);
        }
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/devices", "/"));
        assert!(is_active("/repairs", "/repairs"));
        assert!(!is_active("/repair-history", "/repairs"));
    }
}
