use leptos::prelude::*;

/// Text filter with suggestions: the options come from the loaded rows but
/// free text is accepted too
#[component]
pub fn SearchDropdown(
    /// Unique within the page; links the input to its datalist
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    let list_id = format!("{}-options", id);

    view! {
        <div class="filter-field">
            <label for=id>{label}</label>
            <input
                id=id
                type="search"
                class="filter-field__input"
                list=list_id.clone()
                placeholder="Todos"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <datalist id=list_id>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| view! { <option value=option></option> })
                        .collect_view()
                }}
            </datalist>
        </div>
    }
}
