use contracts::projections::p905_customer_order_history::dto::{CustomerOrderHistoryRow, ENDPOINT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::get_json;
use crate::shared::components::table::format_money;
use crate::shared::crud::api::resource_path;
use crate::shared::date_utils::format_opt_date;

pub async fn fetch_history(customer_id: &str) -> Result<Vec<CustomerOrderHistoryRow>, String> {
    get_json(&resource_path(ENDPOINT, customer_id)).await
}

/// Orders of one customer as returned by the history stored procedure
#[component]
#[allow(non_snake_case)]
pub fn CustomerHistory(customer_id: String, on_close: Callback<()>) -> impl IntoView {
    let rows = RwSignal::new(Vec::<CustomerOrderHistoryRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match fetch_history(&customer_id).await {
            Ok(v) => rows.set(v),
            Err(e) => {
                log::error!("failed to load history of {}: {}", customer_id, e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="customer-history">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <Flex justify=FlexJustify::Center style="padding: var(--spacing-lg);">
                        <Spinner />
                    </Flex>
                }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Pedido"</TableHeaderCell>
                            <TableHeaderCell>"Fecha"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Estado"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let items = rows.get();
                            if items.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="4">
                                            <div class="table__empty">"Sin resultados"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|row| {
                                    let color = if row.is_shipped() {
                                        BadgeColor::Success
                                    } else {
                                        BadgeColor::Warning
                                    };
                                    let date = format_opt_date(row.order_date.as_deref());
                                    let status = row.status_label();
                                    view! {
                                        <TableRow>
                                            <TableCell>{row.order_id}</TableCell>
                                            <TableCell>{date}</TableCell>
                                            <TableCell>{format_money(row.freight)}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=color>
                                                    {status}
                                                </Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </Show>
            <Flex justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    "Cerrar"
                </Button>
            </Flex>
        </div>
    }
}
