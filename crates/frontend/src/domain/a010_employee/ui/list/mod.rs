use contracts::domain::a010_employee::aggregate::Employee;
use leptos::prelude::*;

use crate::shared::crud::{entity_list_view, ListOptions};

/// Employees, with photo thumbnails in the list
#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    entity_list_view::<Employee>(ListOptions::default())
}
