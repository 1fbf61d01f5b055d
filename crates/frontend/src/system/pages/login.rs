use leptos::prelude::*;

use crate::system::auth::context::{do_login, use_auth};

/// Path the API layer redirects to after a 401
pub const LOGIN_PATH: &str = "/login";

pub fn is_login_path(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}

/// Leave `/login` without reloading the app
fn go_home() {
    if let Some(w) = web_sys::window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/"));
        }
    }
}

/// Token form. `on_success` runs after the token is stored.
#[component]
pub fn LoginPage(#[prop(optional)] on_success: Option<Callback<()>>) -> impl IntoView {
    let (token, set_token) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        match do_login(&token.get(), set_auth_state) {
            Ok(()) => {
                go_home();
                if let Some(cb) = on_success {
                    cb.run(());
                }
            }
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SIGEVE"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="access-token">"Token de acceso"</label>
                        <textarea
                            id="access-token"
                            rows="4"
                            placeholder="Pegue aquí el token emitido por el servidor"
                            prop:value=move || token.get()
                            on:input=move |ev| set_token.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Ingresar"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_login_path() {
        assert!(is_login_path("/login"));
        assert!(is_login_path("/login/"));
        assert!(!is_login_path("/"));
        assert!(!is_login_path("/logins"));
    }
}
