//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::{LoginResponse, schema};

use crate::components::form_field::{FormField, begin_submit};
use crate::components::toaster::show_toast;
use crate::state::form::FormState;
use crate::state::session::{Session, SessionState};
use crate::state::toast::{ToastState, ToastVariant};

pub const LOGIN_OK: &str = "User successfully logged in!";
pub const LOGIN_FAILED: &str = "Invalid username/password.";

/// Credentials from the login form, trimmed where it matters.
fn credentials(form: &FormState) -> (String, String) {
    (schema::value(&form.values, "email"), form.value("password"))
}

#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn session_from(resp: LoginResponse) -> Session {
    Session { token: resp.access_token, user: resp.user }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(schema::login()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((email, password)) = begin_submit(form, credentials) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email, &password).await {
                    Ok(resp) => {
                        let fresh = session_from(resp);
                        crate::util::session_store::write(&fresh);
                        session.update(|s| s.sign_in(fresh));
                        show_toast(toasts, LOGIN_OK, ToastVariant::Success);
                        navigate("/loading", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login: rejected: {e}");
                        form.try_update(|f| f.submitting = false);
                        show_toast(toasts, LOGIN_FAILED, ToastVariant::Destructive);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email, password, session, toasts, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Meeting Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage companies, user groups, and users"</p>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    {form
                        .with_untracked(|f| f.schema.fields.clone())
                        .into_iter()
                        .map(|field| view! { <FormField field=field form=form/> })
                        .collect_view()}
                    <button class="login-button" type="submit" disabled=move || !form.with(FormState::can_submit)>
                        {move || if form.with(|f| f.submitting) { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <a class="login-card__link" href="/forgot">
                    "Forgot your password?"
                </a>
            </div>
        </div>
    }
}
