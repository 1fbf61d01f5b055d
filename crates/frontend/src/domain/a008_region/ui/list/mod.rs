use contracts::domain::a008_region::aggregate::Region;
use leptos::prelude::*;

use crate::shared::crud::{entity_list_view, ListOptions};

#[component]
#[allow(non_snake_case)]
pub fn RegionList() -> impl IntoView {
    entity_list_view::<Region>(ListOptions::default())
}
