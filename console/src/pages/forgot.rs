//! Password recovery entry point.
//!
//! Reset links are issued out of band by the backend; this page lets an
//! operator paste the token from such a link and continue to the reset form.

#[cfg(test)]
#[path = "forgot_test.rs"]
mod forgot_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Accepts a bare token or a full reset link and returns the token.
fn extract_token(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let token = match raw.rfind("/reset-password/") {
        Some(at) => &raw[at + "/reset-password/".len()..],
        None => raw,
    };
    let token = token.split(['?', '#']).next().unwrap_or_default().trim_end_matches('/');
    (!token.is_empty()).then(|| token.to_owned())
}

fn reset_route(token: &str) -> String {
    format!("/reset-password/{}", wire::endpoints::encode_segment(token))
}

#[component]
pub fn ForgotPage() -> impl IntoView {
    let navigate = use_navigate();
    let input = RwSignal::new(String::new());
    let hint = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match extract_token(&input.get()) {
            Some(token) => navigate(&reset_route(&token), NavigateOptions::default()),
            None => hint.set("Paste the token or link from your reset email.".to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Forgot password"</h1>
                <p class="login-card__subtitle">
                    "Ask an administrator for a reset link, then paste it or its token below."
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Reset token or link"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Continue"
                    </button>
                </form>
                <Show when=move || !hint.get().is_empty()>
                    <p class="login-message">{move || hint.get()}</p>
                </Show>
                <a class="login-card__link" href="/login">
                    "Back to login"
                </a>
            </div>
        </div>
    }
}
