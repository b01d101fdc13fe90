//! Set a new password using the token from a reset link.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::schema;

use crate::components::form_field::{FormField, begin_submit};
#[cfg(feature = "hydrate")]
use crate::components::toaster::show_toast;
use crate::state::form::FormState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastVariant;

pub const RESET_FAILED: &str = "Error resetting password.";
const RESET_DONE: &str = "Password updated.";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let token = Memo::new(move |_| params.with(|p| p.get("token").unwrap_or_default()));
    let form = RwSignal::new(FormState::new(schema::reset_password()));
    let message = RwSignal::new(None::<(bool, String)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(new_password) = begin_submit(form, |f| f.value("newPassword")) else {
            return;
        };
        let token = token.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&token, &new_password).await {
                    Ok(resp) => {
                        let text = resp.message.unwrap_or_else(|| RESET_DONE.to_owned());
                        message.try_update(|m| *m = Some((true, text.clone())));
                        show_toast(toasts, text, ToastVariant::Success);
                        crate::util::timer::sleep(super::entity_form::REDIRECT_AFTER_SAVE_MS).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("reset password: {e}");
                        form.try_update(|f| f.submitting = false);
                        message.try_update(|m| *m = Some((false, RESET_FAILED.to_owned())));
                        show_toast(toasts, RESET_FAILED, ToastVariant::Destructive);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (new_password, token, toasts, &navigate, RESET_DONE);
    };

    let message_view = move || {
        message.get().map(|(ok, text)| {
            let class = if ok { "login-message" } else { "login-message login-message--error" };
            view! { <p class=class>{text}</p> }
        })
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset password"</h1>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    {form
                        .with_untracked(|f| f.schema.fields.clone())
                        .into_iter()
                        .map(|field| view! { <FormField field=field form=form/> })
                        .collect_view()}
                    <button class="login-button" type="submit" disabled=move || !form.with(FormState::can_submit)>
                        "Update password"
                    </button>
                </form>
                {message_view}
                <a class="login-card__link" href="/login">
                    "Back to login"
                </a>
            </div>
        </div>
    }
}
