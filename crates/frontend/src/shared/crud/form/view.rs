use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::domain::common::EntityRecord;
use contracts::shared::metadata::{FieldKind, FieldMetadata};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::view_model::EntityFormViewModel;
use crate::shared::icons::icon;

/// `src` for a base64 photo payload
pub fn photo_data_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with("data:") {
        raw.to_string()
    } else {
        format!("data:image/jpeg;base64,{}", raw)
    }
}

/// Read the first selected file of an `<input type="file">` as base64
async fn read_photo(input: web_sys::HtmlInputElement) -> Result<Option<String>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("No se pudo leer el archivo: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some(STANDARD.encode(bytes)))
}

fn field_input<T: EntityRecord>(
    vm: EntityFormViewModel<T>,
    field: &'static FieldMetadata,
    read_only: bool,
) -> AnyView {
    let name = field.name;
    let input_id = format!("field-{}", name);
    let placeholder = field.ui.placeholder.unwrap_or("");

    match field.kind {
        FieldKind::LongText => view! {
            <textarea
                id=input_id
                rows="3"
                placeholder=placeholder
                disabled=read_only
                prop:value=move || vm.draft(name)
                on:input=move |ev| vm.set_draft(name, event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Bool => view! {
            <input
                type="checkbox"
                id=input_id
                disabled=read_only
                prop:checked=move || vm.draft(name) == "true"
                on:change=move |ev| vm.set_draft(name, event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldKind::Photo => {
            let on_change = move |ev: leptos::ev::Event| {
                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                spawn_local(async move {
                    match read_photo(input).await {
                        Ok(Some(encoded)) => vm.set_draft(name, encoded),
                        Ok(None) => {}
                        Err(e) => vm.error.set(Some(e)),
                    }
                });
            };
            view! {
                <div class="form-photo">
                    {move || {
                        let raw = vm.draft(name);
                        (!raw.trim().is_empty())
                            .then(|| view! { <img class="form-photo__preview" src=photo_data_url(&raw) alt=field.ui.label /> })
                    }}
                    <input type="file" id=input_id accept="image/*" disabled=read_only on:change=on_change />
                </div>
            }
            .into_any()
        }
        FieldKind::ImageUrl => view! {
            <div class="form-photo">
                {move || {
                    let raw = vm.draft(name);
                    (!raw.trim().is_empty())
                        .then(|| view! { <img class="form-photo__preview" src=raw alt=field.ui.label /> })
                }}
                <input
                    type="text"
                    id=input_id
                    placeholder=placeholder
                    disabled=read_only
                    prop:value=move || vm.draft(name)
                    on:input=move |ev| vm.set_draft(name, event_target_value(&ev))
                />
            </div>
        }
        .into_any(),
        kind => {
            let step = match kind {
                FieldKind::Decimal => Some("0.01"),
                FieldKind::Integer => Some("1"),
                _ => None,
            };
            view! {
                <input
                    type=kind.input_type()
                    id=input_id
                    step=step
                    placeholder=placeholder
                    disabled=read_only
                    prop:value=move || vm.draft(name)
                    on:input=move |ev| vm.set_draft(name, event_target_value(&ev))
                />
            }
            .into_any()
        }
    }
}

/// Modal body for creating (`record == None`) or editing a record of `T`
pub fn entity_form_view<T: EntityRecord>(
    record: Option<T>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> AnyView {
    let vm = EntityFormViewModel::<T>::new(record);
    vm.load_if_needed();
    let edit_mode = vm.is_edit_mode();

    let fields = T::form_fields()
        .into_iter()
        .map(|field| {
            let read_only = edit_mode && field.key;
            view! {
                <div class="form-group">
                    <label for=format!("field-{}", field.name)>
                        {field.ui.label}
                        {field.validation.required.then_some(" *")}
                    </label>
                    {field_input(vm, field, read_only)}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="details-container">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">{fields}</div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {icon("save")}
                    {move || {
                        if vm.saving.get() {
                            "Guardando..."
                        } else if edit_mode {
                            "Guardar"
                        } else {
                            "Crear"
                        }
                    }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_data_url() {
        assert_eq!(photo_data_url("/9j/4AAQ"), "data:image/jpeg;base64,/9j/4AAQ");
        assert_eq!(
            photo_data_url("data:image/png;base64,iVBO"),
            "data:image/png;base64,iVBO"
        );
    }

    #[test]
    fn test_photo_payload_is_standard_base64() {
        assert_eq!(STANDARD.encode([0xffu8, 0xd8, 0xff]), "/9j/");
    }
}
