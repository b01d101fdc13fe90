//! Yes/no confirmation dialog used for deletes and abandoned edits.
//!
//! The modal performs no network calls itself; `on_confirm` decides what
//! happens and whether the dialog closes.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    description: &'static str,
    #[prop(default = "Confirm")] confirm_label: &'static str,
    #[prop(default = "Cancel")] cancel_label: &'static str,
    /// Style the confirm button as destructive.
    #[prop(optional)]
    danger: bool,
    /// Disables both buttons while the confirmed action runs.
    #[prop(optional, into)]
    busy: Option<Signal<bool>>,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let is_busy = move || busy.is_some_and(|b| b.get());
    let confirm_class = if danger { "btn btn--danger" } else { "btn btn--primary" };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && !is_busy() {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| if !is_busy() { on_close.run(()) }>
                <div
                    class="dialog confirm-modal"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2 class="confirm-modal__title">{title}</h2>
                    <p class="confirm-modal__description">{description}</p>
                    <div class="dialog__actions">
                        <button class="btn" disabled=is_busy on:click=move |_| on_close.run(())>
                            {cancel_label}
                        </button>
                        <button class=confirm_class disabled=is_busy on:click=move |_| on_confirm.run(())>
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
