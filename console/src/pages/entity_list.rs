//! Searchable, paginated list shared by every admin resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each fetch takes a ticket from a [`RequestGuard`] and aborts the one
//! before it, so only the newest page or search result ever lands in
//! [`ListState`]. Deleting removes the row locally instead of refetching.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{ListQuery, PAGE_SIZE};

use crate::components::confirm_modal::ConfirmModal;
use crate::components::detail_panel::detail_panel;
use crate::components::empty_state::EmptyState;
use crate::components::layout::Layout;
use crate::components::pagination_bar::PaginationBar;
use crate::components::toaster::show_toast;
use crate::resources::AdminResource;
use crate::state::list::{ListState, ListView};
use crate::state::request::RequestGuard;
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::abort::AbortHandle;
use crate::util::auth::install_unauth_redirect;

/// List page body for resource `R`, wrapped in the authenticated layout.
pub fn entity_list_page<R: AdminResource>() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(session, use_navigate());

    let state = RwSignal::new(ListState::<R::Record>::default());
    let search_input = RwSignal::new(String::new());
    let guard = RequestGuard::default();
    let inflight = StoredValue::new_local(AbortHandle::default());

    on_cleanup({
        let guard = guard.clone();
        move || {
            guard.cancel();
            inflight.try_with_value(AbortHandle::abort);
        }
    });

    // Refetch only when the page or the search term changes.
    let query = Memo::new(move |_| state.with(|s| ListQuery::new(s.pager.page, PAGE_SIZE, s.search.trim())));

    Effect::new(move || {
        let query = query.get();
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
                match crate::net::api::fetch_page::<R::Record>(R::RESOURCE, &query, &abort).await {
                    Ok(page) => {
                        if guard.is_current(ticket) {
                            state.try_update(|s| s.apply_page(page));
                        }
                    }
                    Err(e) if e.is_aborted() => {}
                    Err(e) => log::error!("list: failed to fetch {} page {}: {e}", R::RESOURCE, query.page),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (query, ticket, abort);
    });

    let on_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        search_input.set(term.clone());
        state.update(|s| {
            s.set_search(&term);
        });
    };
    let on_prev = Callback::new(move |()| {
        state.update(|s| {
            s.prev_page();
        });
    });
    let on_next = Callback::new(move |()| {
        state.update(|s| {
            s.next_page();
        });
    });

    let detail_id = Memo::new(move |_| state.with(|s| if s.detail_open { s.selected.clone() } else { None }));
    let close_detail = Callback::new(move |()| {
        state.update(|s| {
            s.close_detail();
            s.selected = None;
        });
    });

    let delete_open = Signal::derive(move || state.with(|s| s.delete_open));
    let deleting = Signal::derive(move || state.with(|s| s.deleting));
    let close_delete = Callback::new(move |()| state.update(ListState::close_delete));
    let confirm_delete = Callback::new(move |()| {
        let Some(id) = state.try_update(ListState::begin_delete).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete(R::RESOURCE, &id).await {
                Ok(()) => {
                    state.try_update(|s| s.remove(&id, R::id));
                    show_toast(toasts, "Deletion Completed!", ToastVariant::Success);
                }
                Err(e) => {
                    log::error!("list: failed to delete {} {id}: {e}", R::RESOURCE);
                    state.try_update(ListState::delete_failed);
                    show_toast(toasts, R::delete_failed_message(), ToastVariant::Destructive);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, toasts);
    });

    let rows = move || {
        state.with(|s| {
            s.items
                .iter()
                .map(|item| {
                    let id = R::id(item).to_owned();
                    let cells = R::columns()
                        .into_iter()
                        .map(|col| view! { <td>{(col.cell)(item)}</td> })
                        .collect_view();
                    let view_id = id.clone();
                    let delete_id = id.clone();
                    view! {
                        <tr>
                            {cells}
                            <td class="entity-table__actions">
                                <button
                                    class="icon-btn"
                                    title="View"
                                    on:click=move |_| state.update(|s| s.open_detail(&view_id))
                                >
                                    "View"
                                </button>
                                <a class="icon-btn" title="Edit" href=R::edit_route(&id)>
                                    "Edit"
                                </a>
                                {R::can_delete()
                                    .then(|| {
                                        view! {
                                            <button
                                                class="icon-btn icon-btn--danger"
                                                title="Delete"
                                                on:click=move |_| state.update(|s| s.open_delete(&delete_id))
                                            >
                                                "Delete"
                                            </button>
                                        }
                                    })}
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let body = move || match state.with(ListState::view) {
        ListView::Loading => view! { <p class="entity-list__loading">"Loading..."</p> }.into_any(),
        ListView::NoRecords => view! {
            <EmptyState
                title=R::EMPTY.no_records_title
                body=R::EMPTY.no_records_body
                action_href=R::add_route()
                action_label=R::register_label()
            />
        }
        .into_any(),
        ListView::NoResults => {
            view! { <EmptyState title=R::EMPTY.no_results_title body=R::EMPTY.no_results_body/> }.into_any()
        }
        ListView::Table => view! {
            <table class="entity-table">
                <thead>
                    <tr>
                        {R::columns().into_iter().map(|col| view! { <th>{col.header}</th> }).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <Layout title=R::TITLE section="Access Control">
            <div class="entity-list">
                <div class="entity-list__toolbar">
                    <input
                        class="entity-list__search"
                        type="search"
                        placeholder="Search by name"
                        prop:value=move || search_input.get()
                        on:input=on_search
                    />
                    <a class="btn btn--primary" href=R::add_route()>
                        {R::register_label()}
                    </a>
                </div>
                {body}
                <PaginationBar pager=Signal::derive(move || state.with(|s| s.pager)) on_prev=on_prev on_next=on_next/>
            </div>
            <ConfirmModal
                open=delete_open
                title="Do you want to delete?"
                description="This action cannot be undone."
                confirm_label="Delete"
                danger=true
                busy=deleting
                on_close=close_delete
                on_confirm=confirm_delete
            />
            {move || detail_id.get().map(|id| detail_panel::<R>(id, close_detail))}
        </Layout>
    }
}
