//! Post-login interstitial.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// How long the spinner shows before moving on.
pub const LOADING_DELAY_MS: u32 = 1_500;

#[component]
pub fn LoadingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::util::timer::sleep(LOADING_DELAY_MS).await;
                let target = session.with_untracked(super::root::landing_route);
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, &navigate);
    });

    view! {
        <div class="spinner-page">
            <div class="spinner"></div>
            <p class="spinner-page__label">"Loading..."</p>
        </div>
    }
}
