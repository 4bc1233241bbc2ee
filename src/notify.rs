//! Toast notifications: a signal-backed store behind a context handle and
//! an overlay component mounted once in the app shell.

use std::time::Duration;

use leptos::*;

const TOAST_DISMISS_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toaster {
    fn new() -> Self {
        Toaster {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|toasts| toasts.retain(|t| t.id != id)),
            Duration::from_millis(TOAST_DISMISS_MS),
        );
    }
}

pub fn provide_toaster() {
    provide_context(Toaster::new());
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            {move || {
                toaster
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        view! {
                            <div class=toast.level.class()>{toast.message}</div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
