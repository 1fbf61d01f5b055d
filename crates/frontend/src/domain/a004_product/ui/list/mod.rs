use contracts::domain::a004_product::aggregate::Product;
use leptos::prelude::*;

use crate::shared::crud::{entity_list_view, ListOptions};

/// Products with price, stock and discontinued flag
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    entity_list_view::<Product>(ListOptions::default())
}
