//! Add and edit forms shared by every admin resource.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::FieldKind;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::form_field::{FormField, begin_submit};
use crate::components::layout::Layout;
use crate::components::toaster::show_toast;
use crate::resources::AdminResource;
use crate::state::form::FormState;
use crate::state::request::RequestGuard;
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::abort::AbortHandle;
use crate::util::auth::install_unauth_redirect;

/// Delay between a successful save and the jump back to the list.
pub const REDIRECT_AFTER_SAVE_MS: u32 = 3_000;
/// Delay between cancelling a registration and the jump back to the list.
pub const REDIRECT_AFTER_CANCEL_MS: u32 = 2_000;

fn field_views(form: RwSignal<FormState>, group_options: RwSignal<Vec<String>>) -> impl IntoView {
    form.with_untracked(|f| f.schema.fields.clone())
        .into_iter()
        .map(|field| view! { <FormField field=field form=form options=group_options/> })
        .collect_view()
}

/// Registration form for resource `R`.
pub fn entity_add_page<R: AdminResource>() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let schema = R::add_schema();
    let needs_groups = schema.fields.iter().any(|f| f.kind == FieldKind::GroupSelect);
    let form = RwSignal::new(FormState::new(schema));
    let group_options = RwSignal::new(Vec::<String>::new());

    if needs_groups {
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_group_options().await {
                    Ok(groups) => {
                        group_options.try_update(|opts| *opts = groups.into_iter().map(|g| g.name).collect());
                    }
                    Err(e) => log::error!("form: failed to load user groups: {e}"),
                }
            });
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(payload) = begin_submit(form, |f| R::add_payload(&f.values)) else {
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::save(R::RESOURCE, &payload).await {
                        Ok(()) => {
                            show_toast(toasts, "Registered Completed", ToastVariant::Success);
                            crate::util::timer::sleep(REDIRECT_AFTER_SAVE_MS).await;
                            navigate(&R::list_route(), NavigateOptions::default());
                        }
                        Err(e) => {
                            log::error!("form: failed to register {}: {e}", R::RESOURCE);
                            form.try_update(|f| f.submitting = false);
                            show_toast(toasts, "Registration not completed", ToastVariant::Destructive);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (payload, &navigate);
        }
    };

    let on_cancel = move |_| {
        show_toast(toasts, "Registered canceled", ToastVariant::Cancel);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::util::timer::sleep(REDIRECT_AFTER_CANCEL_MS).await;
                navigate(&R::list_route(), NavigateOptions::default());
            });
        }
    };

    view! {
        <Layout title=R::register_label() section="Access Control">
            <form class="entity-form" on:submit=on_submit novalidate=true>
                {field_views(form, group_options)}
                <div class="entity-form__actions">
                    <button class="btn" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || !form.with(FormState::can_submit)>
                        "Register"
                    </button>
                </div>
            </form>
        </Layout>
    }
}

/// Edit form for the record named by the `:id` route parameter.
pub fn entity_edit_page<R: AdminResource>() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let record_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let form = RwSignal::new(FormState::new(R::edit_schema()));
    let group_options = RwSignal::new(Vec::<String>::new());
    let load_failed = RwSignal::new(false);
    let cancel_open = RwSignal::new(false);
    let guard = RequestGuard::default();
    let inflight = StoredValue::new_local(AbortHandle::default());

    on_cleanup({
        let guard = guard.clone();
        move || {
            guard.cancel();
            inflight.try_with_value(AbortHandle::abort);
        }
    });

    Effect::new(move || {
        let id = record_id.get();
        if id.is_empty() {
            return;
        }
        let ticket = guard.issue();
        let abort = AbortHandle::new();
        inflight.update_value(|prev| {
            prev.abort();
            *prev = abort.clone();
        });

        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_one::<R::Record>(R::RESOURCE, &id, &abort).await {
                    Ok(record) => {
                        if guard.is_current(ticket) {
                            form.try_update(|f| f.prefill(R::prefill(&record)));
                        }
                    }
                    Err(e) if e.is_aborted() => {}
                    Err(e) => {
                        log::error!("form: failed to load {} {id}: {e}", R::RESOURCE);
                        load_failed.try_update(|failed| *failed = true);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, abort);
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let id = record_id.get_untracked();
            let Some(payload) = begin_submit(form, |f| R::edit_payload(&id, &f.values)) else {
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::save(R::RESOURCE, &payload).await {
                        Ok(()) => {
                            show_toast(toasts, "Data saved successfully", ToastVariant::Success);
                            crate::util::timer::sleep(REDIRECT_AFTER_SAVE_MS).await;
                            navigate(&R::list_route(), NavigateOptions::default());
                        }
                        Err(e) => {
                            log::error!("form: failed to update {} {id}: {e}", R::RESOURCE);
                            form.try_update(|f| f.submitting = false);
                            show_toast(toasts, "Update not completed", ToastVariant::Destructive);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (payload, &navigate, toasts);
        }
    };

    let leave = Callback::new(move |()| {
        cancel_open.set(false);
        navigate(&R::list_route(), NavigateOptions::default());
    });

    view! {
        <Layout title=format!("Edit {}", R::SINGULAR) section="Access Control">
            <Show when=move || load_failed.get()>
                <p class="entity-form__error">{format!("Could not load {}.", R::SINGULAR.to_lowercase())}</p>
            </Show>
            <form class="entity-form" on:submit=on_submit novalidate=true>
                {field_views(form, group_options)}
                <div class="entity-form__actions">
                    <button class="btn" type="button" on:click=move |_| cancel_open.set(true)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || !form.with(FormState::can_submit)>
                        "Save"
                    </button>
                </div>
            </form>
            <ConfirmModal
                open=cancel_open
                title="Do you want to cancel?"
                description="The entered data will not be saved"
                confirm_label="Yes"
                cancel_label="No"
                on_close=Callback::new(move |()| cancel_open.set(false))
                on_confirm=leave
            />
        </Layout>
    }
}
