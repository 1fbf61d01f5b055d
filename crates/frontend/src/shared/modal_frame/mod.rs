use leptos::ev;
use leptos::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Modal frame container (overlay + positioned surface).
///
/// With a `title` the frame draws a header with a close button; without one
/// the content renders its own header.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click, header button).
    on_close: Callback<()>,
    #[prop(optional, into)]
    title: Option<String>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra style for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only when press and release both happen on the overlay, so a text
    // selection dragged out of the form does not dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let close_next_tick = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_next_tick();
        }
    };

    let modal_class = match modal_class {
        Some(cls) if !cls.is_empty() => format!("modal {cls}"),
        _ => "modal".to_string(),
    };
    let modal_style = format!(
        "position: relative; {}",
        modal_style.unwrap_or_default()
    );

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class style=modal_style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {title.filter(|t| !t.is_empty()).map(|t| view! {
                    <div class="modal__header">
                        <h3 class="modal__title">{t}</h3>
                        <button
                            class="modal__close"
                            title="Cerrar"
                            on:click=move |_| close_next_tick()
                        >
                            {icon("x")}
                        </button>
                    </div>
                })}
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
