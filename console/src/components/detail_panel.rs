//! Side panel with the full record for one list row.
//!
//! The record is fetched lazily when the panel opens; a closed or replaced
//! panel aborts its request and ignores any late response.

use leptos::prelude::*;

use crate::resources::AdminResource;
use crate::state::request::RequestGuard;
use crate::util::abort::AbortHandle;

/// Render the panel for record `id` of resource `R`.
pub fn detail_panel<R: AdminResource>(id: String, on_close: Callback<()>) -> impl IntoView {
    let record = RwSignal::new(None::<R::Record>);
    let failed = RwSignal::new(false);
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
        let ticket = guard.issue();
        let abort = AbortHandle::new();
        inflight.set_value(abort.clone());

        #[cfg(feature = "hydrate")]
        {
            let id = id.clone();
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_one::<R::Record>(R::RESOURCE, &id, &abort).await {
                    Ok(found) => {
                        if guard.is_current(ticket) {
                            record.try_update(|slot| *slot = Some(found));
                        }
                    }
                    Err(e) if e.is_aborted() => {}
                    Err(e) => {
                        log::error!("detail: failed to load {} {id}: {e}", R::RESOURCE);
                        failed.try_update(|f| *f = true);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, abort, &id);
    });

    let body = move || match record.get() {
        Some(found) => R::detail_sections(&found)
            .into_iter()
            .map(|section| {
                view! {
                    <section class="detail-panel__section">
                        <h3>{section.heading}</h3>
                        <dl>
                            {section
                                .rows
                                .into_iter()
                                .map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> })
                                .collect_view()}
                        </dl>
                    </section>
                }
            })
            .collect_view()
            .into_any(),
        None if failed.get() => view! {
            <p class="detail-panel__error">{format!("Could not load {}.", R::SINGULAR.to_lowercase())}</p>
        }
        .into_any(),
        None => view! { <p class="detail-panel__loading">"Loading..."</p> }.into_any(),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <aside class="detail-panel" on:click=move |ev| ev.stop_propagation()>
                <header class="detail-panel__header">
                    <h2>{format!("{} details", R::SINGULAR)}</h2>
                    <button class="detail-panel__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                {body}
            </aside>
        </div>
    }
}
