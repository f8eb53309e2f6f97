use crate::shared::icons::icon;
use contracts::shared::notifications::{NotificationQueue, Toast, ToastKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Toast notifications shared by all pages.
///
/// - Created once in `App` and provided through context
/// - `init` must run before toasts are accepted, `dispose` drops everything
/// - Each toast dismisses itself after `dismiss_after_ms` (0 = sticky)
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<NotificationQueue>,
    active: RwSignal<bool>,
    dismiss_after_ms: u32,
}

impl ToastService {
    pub fn new(capacity: usize, dismiss_after_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new(capacity)),
            active: RwSignal::new(false),
            dismiss_after_ms,
        }
    }

    pub fn init(&self) {
        self.active.set(true);
    }

    pub fn dispose(&self) {
        self.active.set(false);
        self.queue.update(|q| q.clear());
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> Option<u64> {
        if !self.active.get_untracked() {
            log::warn!("toast dropped: service is not initialised");
            return None;
        }

        let message = message.into();
        log::debug!("toast {:?}: {}", kind, message);
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        if self.dismiss_after_ms > 0 {
            let svc = *self;
            let delay = self.dismiss_after_ms;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                svc.dismiss(id);
            });
        }
        Some(id)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<u64> {
        self.push(ToastKind::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<u64> {
        self.push(ToastKind::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Option<u64> {
        self.push(ToastKind::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<u64> {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        // The service may already be disposed together with its owner.
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().cloned().collect())
    }
}

pub fn use_toasts() -> Option<ToastService> {
    use_context::<ToastService>()
}

/// Renders the toasts of the `ToastService` from context.
#[component]
pub fn ToastHost() -> impl IntoView {
    let Some(service) = use_toasts() else {
        log::warn!("ToastHost rendered without ToastService");
        return ().into_any();
    };

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_class())>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
    .into_any()
}
