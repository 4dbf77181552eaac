//! Всплывающие уведомления об успехе и ошибках

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
}

/// Сервис уведомлений (предоставляется через context).
/// При `duration_ms == 0` уведомления закрываются только вручную
#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    duration_ms: u32,
}

impl NotificationService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            duration_ms,
        }
    }

    pub fn success(&self, title: impl Into<String>, message: Option<String>) {
        self.push(ToastKind::Success, title.into(), message);
    }

    pub fn error(&self, title: impl Into<String>, message: Option<String>) {
        self.push(ToastKind::Error, title.into(), message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    fn push(&self, kind: ToastKind, title: String, message: Option<String>) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title,
                message,
            })
        });

        if self.duration_ms == 0 {
            return;
        }
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.duration_ms).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Область вывода уведомлений
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toaster">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| service.dismiss(id)>
                            <div class="toast__title">{toast.title}</div>
                            {toast.message.map(|m| view! { <div class="toast__message">{m}</div> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
