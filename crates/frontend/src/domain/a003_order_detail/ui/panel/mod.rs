use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::a003_order_detail::aggregate::{order_total, OrderDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_order_detail::api;
use crate::domain::a003_order_detail::ui::form::FormOrderDetail;
use crate::shared::components::table::{format_money, format_number_with_decimals, TableCellMoney};
use crate::shared::components::ConfirmDialog;
use crate::shared::crud::api as crud_api;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::use_toast;

/// Lines of one order with add/edit/delete and whole-order deletion.
///
/// `on_order_changed` fires after any deletion so the order list can refetch.
#[component]
#[allow(non_snake_case)]
pub fn OrderDetailsPanel(
    order_id: i64,
    on_order_changed: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_toast();

    let lines = RwSignal::new(Vec::<OrderDetail>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_by_order(order_id).await {
                Ok(v) => {
                    lines.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load lines of order {}: {}", order_id, e);
                    lines.set(Vec::new());
                    set_error.set(Some(format!("Error al cargar los detalles: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    let open_line_form = move |detail: Option<OrderDetail>| {
        let title = if detail.is_some() {
            "Editar Detalle de Orden"
        } else {
            "Agregar Detalle a la Orden"
        };
        modal_stack.push(title, move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    toast.success("Detalle guardado");
                    load();
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! {
                <FormOrderDetail
                    order_id=order_id
                    detail=detail.clone()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    let confirm_delete_line = move |detail: OrderDetail| {
        let key = detail.key();
        modal_stack.push("Eliminar producto", move |handle| {
            let on_confirm = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    spawn_local(async move {
                        match api::remove(&key).await {
                            Ok(()) => {
                                toast.success("Producto eliminado correctamente de la orden");
                                load();
                                on_order_changed.run(());
                            }
                            Err(e) => {
                                log::error!("failed to delete line {}: {}", key.path(), e);
                                toast.error("Error al eliminar el producto de la orden");
                            }
                        }
                    });
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! {
                <ConfirmDialog
                    message="¿Está seguro de que desea eliminar este producto de la orden?".to_string()
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    let confirm_delete_order = move || {
        let count = lines.with_untracked(|l| l.len());
        let message = format!(
            "¿Está seguro de eliminar la orden #{}? Se eliminarán {} productos asociados a esta orden. ¡Esta acción no se puede deshacer!",
            order_id, count
        );
        modal_stack.push("Confirmar Eliminación", move |handle| {
            let on_confirm = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    spawn_local(async move {
                        match crud_api::remove::<Order>(&order_id.to_string()).await {
                            Ok(()) => {
                                toast.success(format!("Orden {} eliminada correctamente", order_id));
                                on_order_changed.run(());
                                on_close.run(());
                            }
                            Err(e) => {
                                log::error!("failed to delete order {}: {}", order_id, e);
                                toast.error("Error al eliminar la orden");
                            }
                        }
                    });
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! {
                <ConfirmDialog
                    message=message.clone()
                    confirm_label="Eliminar Orden"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    load();

    view! {
        <div class="order-details">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3>{format!("Detalles de la Orden: {}", order_id)}</h3>
                <Show when=move || lines.with(|l| !l.is_empty())>
                    <Flex gap=FlexGap::Small>
                        <Badge appearance=BadgeAppearance::Outline>
                            {move || format!("{} productos", lines.with(|l| l.len()))}
                        </Badge>
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                            {move || format!("Total: {}", lines.with(|l| format_money(order_total(l))))}
                        </Badge>
                    </Flex>
                </Show>
            </Flex>

            <div class="alert alert--info">"Desde aquí puede gestionar los productos de la orden."</div>
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
                            <TableHeaderCell>"Producto ID"</TableHeaderCell>
                            <TableHeaderCell>"Precio Unitario"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Descuento"</TableHeaderCell>
                            <TableHeaderCell>"Subtotal"</TableHeaderCell>
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let items = lines.get();
                            if items.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="6">
                                            <div class="table__empty">"No se encontraron productos para esta orden"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|detail| {
                                    let for_edit = detail.clone();
                                    let for_delete = detail.clone();
                                    let discount = format!("{}%", format_number_with_decimals(detail.discount_percent(), 1));
                                    let discount_color = if detail.discount > 0.0 {
                                        BadgeColor::Warning
                                    } else {
                                        BadgeColor::Informative
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>{detail.product_id}</TableCell>
                                            <TableCellMoney value=detail.unit_price />
                                            <TableCell class="text-center">{detail.quantity}</TableCell>
                                            <TableCell class="text-right">
                                                <Badge appearance=BadgeAppearance::Tint color=discount_color>{discount}</Badge>
                                            </TableCell>
                                            <TableCellMoney value=detail.subtotal() bold=true />
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="table__action-btn"
                                                        title="Editar producto de la orden"
                                                        on:click=move |_| open_line_form(Some(for_edit.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="table__action-btn table__action-btn--danger"
                                                        title="Eliminar producto de la orden"
                                                        on:click=move |_| confirm_delete_line(for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
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

            <div class="details-actions details-actions--spread">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| confirm_delete_order()>
                    {icon("delete")}
                    "Eliminar Orden Completa"
                </Button>
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_line_form(None)>
                        {icon("plus")}
                        "Agregar producto"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                        "Cerrar"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
