//! Toast stack pinned to the corner of the viewport.

use leptos::prelude::*;

use crate::state::toast::{TOAST_TTL_MS, Toast, ToastState, ToastVariant};

/// Push a toast onto the shared queue and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, title: impl Into<String>, variant: ToastVariant) {
    let id = toasts.try_update(|state| state.push(title, variant));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            crate::util::timer::sleep(TOAST_TTL_MS).await;
            toasts.try_update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, TOAST_TTL_MS);
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.class()>
                            <span class="toast__title">{toast.title}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
