use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

use crate::domain::a001_customer::ui::history::CustomerHistory;
use crate::shared::crud::{entity_list_view, ListOptions, RowActionArgs};
use crate::shared::modal_stack::ModalStackService;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_history = move |args: RowActionArgs<Customer>| {
        let Some(customer_id) = args.record.id_string() else {
            return;
        };
        modal_stack.push(
            format!("Historial del Cliente: {}", customer_id),
            move |handle| {
                let on_close = Callback::new(move |_: ()| handle.close());
                view! { <CustomerHistory customer_id=customer_id.clone() on_close=on_close /> }
                    .into_any()
            },
        );
    };

    entity_list_view::<Customer>(ListOptions::default().with_action(
        "history",
        "Historial de pedidos",
        open_history,
    ))
}
