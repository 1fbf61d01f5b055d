use contracts::domain::a002_order::aggregate::Order;
use leptos::prelude::*;

use crate::domain::a003_order_detail::ui::panel::OrderDetailsPanel;
use crate::shared::crud::{entity_list_view, ListOptions, RowActionArgs};
use crate::shared::modal_stack::ModalStackService;

const DETAILS_MODAL_STYLE: &str = "max-width: min(1100px, 95vw); width: min(1100px, 95vw);";

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |args: RowActionArgs<Order>| {
        let Some(order_id) = args.record.id else {
            return;
        };
        let reload = args.reload;
        modal_stack.push_with_style(
            format!("Orden {}", order_id),
            DETAILS_MODAL_STYLE,
            move |handle| {
                let on_close = Callback::new(move |_: ()| handle.close());
                view! {
                    <OrderDetailsPanel
                        order_id=order_id
                        on_order_changed=reload
                        on_close=on_close
                    />
                }
                .into_any()
            },
        );
    };

    entity_list_view::<Order>(ListOptions::default().with_action(
        "eye",
        "Ver detalles de la orden",
        open_details,
    ))
}
