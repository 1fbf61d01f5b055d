use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard figure: label, formatted value and an optional hint line
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    /// Already formatted; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "…".to_string())}
            </div>
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
