use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
}

/// Auth context provider component
///
/// The session is whatever token sits in localStorage; the backend rejects
/// stale ones with 401 and the API layer sends the user back to `/login`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the token and switch the shell to the main layout
pub fn do_login(token: &str, set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    let token = token.trim();
    if token.is_empty() {
        return Err("Ingrese un token de acceso".to_string());
    }
    storage::save_access_token(token);
    set_auth_state.set(AuthState {
        access_token: Some(token.to_string()),
    });
    log::info!("session started");
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_access_token();
    set_auth_state.set(AuthState::default());
    log::info!("session closed");
}
