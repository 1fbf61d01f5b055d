use contracts::domain::a005_category::aggregate::Category;
use leptos::prelude::*;

use crate::shared::crud::{entity_list_view, ListOptions};

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    entity_list_view::<Category>(ListOptions::default())
}
