use contracts::domain::a009_territory::aggregate::Territory;
use leptos::prelude::*;

use crate::shared::crud::{entity_list_view, ListOptions};

/// Territories keyed by their user-entered code
#[component]
#[allow(non_snake_case)]
pub fn TerritoryList() -> impl IntoView {
    entity_list_view::<Territory>(ListOptions::default())
}
