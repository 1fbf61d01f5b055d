use leptos::prelude::*;

/// Two `<input type="date">` bounds, each may stay empty
#[component]
pub fn DateRangeFilter(
    /// `YYYY-MM-DD` or empty
    #[prop(into)]
    date_from: Signal<String>,
    #[prop(into)]
    date_to: Signal<String>,
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="filter-field filter-field--range">
            <label>"Desde"</label>
            <input
                type="date"
                prop:value=move || date_from.get()
                on:change=move |ev| on_change.run((event_target_value(&ev), date_to.get_untracked()))
            />
            <label>"Hasta"</label>
            <input
                type="date"
                prop:value=move || date_to.get()
                on:change=move |ev| on_change.run((date_from.get_untracked(), event_target_value(&ev)))
            />
        </div>
    }
}
