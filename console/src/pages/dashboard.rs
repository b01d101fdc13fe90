//! Summary tiles linking to each admin area.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::Resource;

use crate::components::layout::Layout;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tile {
    title: &'static str,
    href: &'static str,
    blurb: &'static str,
    /// Counted via a one-row list request.
    resource: Option<Resource>,
}

const TILES: &[Tile] = &[
    Tile {
        title: "Companies",
        href: "/companies/list",
        blurb: "Organizations and their leaders",
        resource: Some(Resource::Companies),
    },
    Tile {
        title: "User Groups",
        href: "/userGroups/list",
        blurb: "Groups inside each company",
        resource: Some(Resource::UserGroups),
    },
    Tile { title: "Users", href: "/users/list", blurb: "People with access", resource: Some(Resource::Users) },
    Tile { title: "API Testing", href: "/api-testing", blurb: "Exercise the meeting endpoints", resource: None },
];

fn count_label(count: Option<u64>) -> String {
    match count {
        Some(n) => format!("{n} registered"),
        None => "-".to_owned(),
    }
}

fn tile_view(tile: Tile) -> impl IntoView {
    let count = RwSignal::new(None::<u64>);

    if let Some(resource) = tile.resource {
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let query = wire::ListQuery::new(1, 1, "");
                let abort = crate::util::abort::AbortHandle::new();
                match crate::net::api::fetch_page::<serde_json::Value>(resource, &query, &abort).await {
                    Ok(page) => {
                        count.try_update(|c| *c = Some(page.meta.total));
                    }
                    Err(e) => log::error!("dashboard: failed to count {resource}: {e}"),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = resource;
        });
    }

    view! {
        <a class="dashboard-tile" href=tile.href>
            <h2 class="dashboard-tile__title">{tile.title}</h2>
            <p class="dashboard-tile__blurb">{tile.blurb}</p>
            {tile.resource.map(|_| view! { <p class="dashboard-tile__count">{move || count_label(count.get())}</p> })}
        </a>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Layout title="Dashboard">
            <div class="dashboard-grid">{TILES.iter().map(|tile| tile_view(*tile)).collect_view()}</div>
        </Layout>
    }
}
