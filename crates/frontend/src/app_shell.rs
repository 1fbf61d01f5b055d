//! Auth gate and main layout

use crate::dashboards::d400_sales_dashboard::ui::TAB_KEY as DASHBOARD_TAB;
use crate::layout::center::TabBar;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::{is_login_path, LoginPage};
use leptos::prelude::*;

/// Sidebar, tab strip and the opened tabs. The dashboard opens unless the
/// URL already names a tab.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    if !tabs_store.init_router_integration(tab_label_for_key) {
        tabs_store.open_tab(DASHBOARD_TAB, tab_label_for_key(DASHBOARD_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <div class="tab-content">
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        />
                    </div>
                }
                .into_any()
            }
        />
    }
}

/// `LoginPage` without a stored token or on `/login`, `MainLayout` otherwise
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let on_login_path = RwSignal::new(is_login_path(&path));

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some() && !on_login_path.get()
            fallback=move || view! {
                <LoginPage on_success=Callback::new(move |_| on_login_path.set(false)) />
            }
        >
            <MainLayout />
        </Show>
    }
}
