use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Body of a confirmation modal; the caller pushes it on the modal stack
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Eliminar".to_string());

    view! {
        <div class="confirm-dialog">
            <div class="confirm-dialog__message">
                {icon("alert")}
                <span>{message}</span>
            </div>
            <Flex justify=FlexJustify::End>
                <Button on_click=move |_| on_cancel.run(())>"Cancelar"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {confirm_label}
                </Button>
            </Flex>
        </div>
    }
}
