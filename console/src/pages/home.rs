//! Welcome card shown after sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Today's local date from the browser clock.
#[cfg(feature = "hydrate")]
fn today() -> Option<time::Date> {
    let now = js_sys::Date::new_0();
    let month = time::Month::try_from(u8::try_from(now.get_month() + 1).ok()?).ok()?;
    let year = i32::try_from(now.get_full_year()).ok()?;
    let day = u8::try_from(now.get_date()).ok()?;
    time::Date::from_calendar_date(year, month, day).ok()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    // Filled after hydration so server and client markup agree.
    let date_label = RwSignal::new(String::new());
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        if let Some(date) = today() {
            date_label.set(wire::display::welcome_date(date));
        }
    });

    let name = move || session.with(|s| s.display_name().unwrap_or("there").to_owned());

    view! {
        <Layout title="Home">
            <section class="welcome-card">
                <p class="welcome-card__date">{move || date_label.get()}</p>
                <h2 class="welcome-card__title">"Welcome, " {name}</h2>
                <p class="welcome-card__body">
                    "Manage companies, user groups, and users from the Access Control menu."
                </p>
                <a class="btn btn--primary" href="/dashboard">
                    "Open dashboard"
                </a>
            </section>
        </Layout>
    }
}
