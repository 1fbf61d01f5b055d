//! PageFrame: root wrapper of every page rendered inside a tab.
//!
//! Sets `id="{tab_key}--{category}"` and `data-page-category` on the root
//! element so pages can be located in the DOM.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCategory {
    List,
    Report,
    Dashboard,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Report => "report",
            PageCategory::Dashboard => "dashboard",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Report => "page page--report",
            PageCategory::Dashboard => "page page--dashboard",
        }
    }
}

pub fn page_id(tab_key: &str, category: PageCategory) -> String {
    format!("{}--{}", tab_key, category.as_str())
}

#[component]
pub fn PageFrame(
    /// Tab key of the page, e.g. `a001_customer`
    #[prop(into)]
    tab_key: String,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id(&tab_key, category)
            class=category.css_class()
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(
            page_id("a001_customer", PageCategory::List),
            "a001_customer--list"
        );
        assert_eq!(
            page_id("d400_sales_dashboard", PageCategory::Dashboard),
            "d400_sales_dashboard--dashboard"
        );
    }
}
