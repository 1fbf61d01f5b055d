use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Strip of opened tabs; clicking activates, the cross closes
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| {
                    let key = StoredValue::new(tab.key.clone());
                    let is_active = Memo::new(move |_| {
                        tabs_store.active.with(|a| key.with_value(|k| a.as_deref() == Some(k.as_str())))
                    });
                    let on_close = move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        key.with_value(|k| tabs_store.close_tab(k));
                    };
                    view! {
                        <div
                            class="tab"
                            class:active=is_active
                            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
                        >
                            <span>{tab.title}</span>
                            <button class="tab-close" title="Cerrar" on:click=on_close>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
