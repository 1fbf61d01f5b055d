//! Transient notifications shown in the corner of the screen

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u32 = 2800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastSeverity {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastSeverity::Success => "toast toast--success",
            ToastSeverity::Info => "toast toast--info",
            ToastSeverity::Warning => "toast toast--warning",
            ToastSeverity::Error => "toast toast--error",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            ToastSeverity::Success => "check",
            ToastSeverity::Info => "info",
            ToastSeverity::Warning | ToastSeverity::Error => "alert",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    message: String,
    severity: ToastSeverity,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn show(&self, message: impl Into<String>, severity: ToastSeverity) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                message: message.into(),
                severity,
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Error);
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the active toasts; mounted once next to `ModalHost`
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-container">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.severity.css_class() role="alert">
                            {icon(toast.severity.icon_name())}
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
