//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "commercial",
            label: "Gestión Comercial",
            icon: "orders",
            items: vec![
                ("d400_sales_dashboard", "dashboard"),
                ("a001_customer", "customers"),
                ("a002_order", "orders"),
                ("a004_product", "products"),
                ("a005_category", "categories"),
                ("a006_supplier", "suppliers"),
                ("a010_employee", "employees"),
            ],
        },
        MenuGroup {
            id: "logistics",
            label: "Logística",
            icon: "shippers",
            items: vec![
                ("a007_shipper", "shippers"),
                ("a008_region", "regions"),
                ("a009_territory", "territories"),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Reportes",
            icon: "report",
            items: vec![
                ("p900_order_detail_report", "report"),
                ("p901_customer_region_sales", "regions"),
                ("p902_category_sales", "pie"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let items = StoredValue::new(group.items);
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item app-sidebar__group"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    expanded_groups.update(|ids| {
                                        if let Some(pos) = ids.iter().position(|x| x == group_id) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(group_id.to_string());
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
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|ids| ids.iter().any(|x| x == group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.with(|ids| ids.iter().any(|x| x == group_id))>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(key))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, _) in group.items {
                assert!(!tab_label_for_key(key).is_empty(), "no label for {}", key);
            }
        }
    }

    #[test]
    fn test_menu_groups() {
        let labels: Vec<&str> = get_menu_groups().iter().map(|g| g.label).collect();
        assert_eq!(labels, ["Gestión Comercial", "Logística", "Reportes"]);
    }
}
