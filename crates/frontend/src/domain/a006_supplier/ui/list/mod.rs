use contracts::domain::a006_supplier::aggregate::Supplier;
use leptos::prelude::*;

use crate::shared::crud::{entity_list_view, ListOptions};

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    entity_list_view::<Supplier>(ListOptions::default())
}
