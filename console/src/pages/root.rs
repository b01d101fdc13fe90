#[cfg(test)]
#[path = "root_test.rs"]
mod root_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Landing route of a session, or `/login` without one.
#[must_use]
pub fn landing_route(state: &SessionState) -> &'static str {
    if state.is_authenticated() { "/home" } else { "/login" }
}

/// `/`: forwards once the persisted session has been read.
#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = session.with(|s| s.loaded.then(|| landing_route(s)));
        if let Some(target) = target {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <div class="spinner-page"><div class="spinner"></div></div> }
}
