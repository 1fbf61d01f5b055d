use contracts::domain::a007_shipper::aggregate::Shipper;
use leptos::prelude::*;

use crate::shared::crud::{entity_list_view, ListOptions};

/// Shipping companies
#[component]
#[allow(non_snake_case)]
pub fn ShipperList() -> impl IntoView {
    entity_list_view::<Shipper>(ListOptions::default())
}
