use contracts::domain::a003_order_detail::aggregate::{OrderDetail, OrderDetailForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_order_detail::api;
use crate::shared::icons::icon;

/// Add a line to `order_id`, or edit `detail` when given
#[component]
#[allow(non_snake_case)]
pub fn FormOrderDetail(
    order_id: i64,
    detail: Option<OrderDetail>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let edit_key = detail.as_ref().map(OrderDetail::key);
    let initial = match &detail {
        Some(d) => OrderDetailForm::from_detail(d),
        None => OrderDetailForm {
            discount_percent: "0".to_string(),
            ..Default::default()
        },
    };
    let form = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let detail = match form.with_untracked(|f| f.to_detail(order_id)) {
            Ok(d) => d,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = match &edit_key {
                Some(key) => api::update(key, &detail).await,
                None => api::create(&detail).await,
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("failed to save line of order {}: {}", order_id, e);
                    error.set(Some(format!(
                        "Error al guardar el detalle. Verifique los datos. ({})",
                        e
                    )));
                }
            }
        });
    };

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="line-product">"ID Producto *"</label>
                    <input
                        type="number"
                        id="line-product"
                        min="1"
                        disabled=edit_key.is_some()
                        prop:value=move || form.with(|f| f.product_id.clone())
                        on:input=move |ev| form.update(|f| f.product_id = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="line-price">"Precio Unitario *"</label>
                    <input
                        type="number"
                        id="line-price"
                        step="0.01"
                        min="0"
                        prop:value=move || form.with(|f| f.unit_price.clone())
                        on:input=move |ev| form.update(|f| f.unit_price = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="line-quantity">"Cantidad *"</label>
                    <input
                        type="number"
                        id="line-quantity"
                        min="1"
                        prop:value=move || form.with(|f| f.quantity.clone())
                        on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="line-discount">"Descuento (%)"</label>
                    <input
                        type="number"
                        id="line-discount"
                        step="0.1"
                        min="0"
                        max="100"
                        prop:value=move || form.with(|f| f.discount_percent.clone())
                        on:input=move |ev| form.update(|f| f.discount_percent = event_target_value(&ev))
                    />
                    <small class="form-hint">"Ejemplo: 10 para 10% de descuento"</small>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" disabled=move || saving.get() on:click=move |_| save()>
                    {icon("save")}
                    {move || if saving.get() { "Guardando..." } else if edit_key.is_some() { "Guardar" } else { "Agregar" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
