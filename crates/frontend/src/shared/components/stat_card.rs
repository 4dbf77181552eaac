use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Цветовой тон карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Warning,
    Error,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
        }
    }
}

/// Карточка показателя со ссылкой на страницу раздела
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    /// Страница, на которую ведёт карточка
    href: &'static str,
    #[prop(optional)]
    tone: StatTone,
) -> impl IntoView {
    view! {
        <A href=href>
            <div class=tone.class()>
                <div class="stat-card__header">
                    <span class="stat-card__label">{label}</span>
                    <span class="stat-card__icon">{icon(icon_name)}</span>
                </div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </A>
    }
}
