//! Transient notification stack.
//!
//! DESIGN
//! ======
//! Rendering is keyed by toast id so each toast mounts exactly once and
//! owns exactly one dismissal timer, no matter how the queue around it
//! changes. Clicking a toast dismisses it early.

#[cfg(test)]
#[path = "toast_tray_test.rs"]
mod toast_tray_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastKind, ToastsState};

/// Fixed-position stack of active toasts.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toast-tray" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=|toast: Toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let id = toast.id;
    let class = toast_class(toast.kind);
    let linger = Duration::from_millis(toast.kind.dismiss_after_ms());

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(linger).await;
        toasts.update(|state| state.dismiss(id));
    });

    view! {
        <div class=class role="status" on:click=move |_| toasts.update(|state| state.dismiss(id))>
            <span class="toast__message">{toast.message}</span>
        </div>
    }
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}
