//! Manual harness for the meeting endpoints (`/api/meet/login|create|join`).
//!
//! Three independent forms; each shows the backend's answer inline. "Init"
//! wipes every form and result.

#![cfg_attr(not(feature = "hydrate"), allow(dead_code))]

#[cfg(test)]
#[path = "api_testing_test.rs"]
mod api_testing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::schema::{self, value};
use wire::{FormValues, MeetCreateRequest, MeetCreateResponse, MeetJoinRequest, MeetJoinResponse, MeetLoginRequest, MeetLoginResponse, Schema};

use crate::components::form_field::{FormField, begin_submit};
use crate::components::layout::Layout;
use crate::components::toaster::show_toast;
use crate::state::form::FormState;
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::auth::install_unauth_redirect;

type ResultRows = Vec<(&'static str, String)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Harness {
    Login,
    Create,
    Join,
}

impl Harness {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Create => "Create",
            Self::Join => "Join",
        }
    }

    fn schema(self) -> Schema {
        match self {
            Self::Login => schema::meet_login(),
            Self::Create => schema::meet_create(),
            Self::Join => schema::meet_join(),
        }
    }

    fn done_toast(self) -> String {
        format!("{} Completed", self.title())
    }

    fn failed_toast(self) -> String {
        format!("{} not completed", self.title())
    }
}

fn login_request(values: &FormValues) -> MeetLoginRequest {
    MeetLoginRequest { email: value(values, "email"), password: values.get("password").cloned().unwrap_or_default() }
}

fn create_request(values: &FormValues) -> MeetCreateRequest {
    MeetCreateRequest {
        email: value(values, "email"),
        password: values.get("password").cloned().unwrap_or_default(),
        meeting_type: value(values, "meeting_type"),
    }
}

fn join_request(values: &FormValues) -> MeetJoinRequest {
    MeetJoinRequest {
        email: value(values, "email"),
        password: values.get("password").cloned().unwrap_or_default(),
        meeting_id: value(values, "meeting_id"),
        meeting_url: value(values, "meeting_url"),
        meeting_passcode: value(values, "meeting_passcode"),
    }
}

fn shown(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_owned())
}

fn login_rows(resp: MeetLoginResponse) -> ResultRows {
    vec![
        ("Google API key", shown(resp.google_api_key)),
        ("Zoom API key", shown(resp.zoom_api_key)),
        ("Teams API key", shown(resp.teams_api_key)),
    ]
}

fn create_rows(resp: MeetCreateResponse) -> ResultRows {
    vec![
        ("Meeting type", shown(resp.meeting_type)),
        ("Meeting URL", shown(resp.meeting_url)),
        ("Meeting ID", shown(resp.meeting_id)),
        ("Passcode", shown(resp.meeting_passcode.map(|p| p.to_string()))),
    ]
}

fn join_rows(resp: MeetJoinResponse) -> ResultRows {
    let started = match resp.start_meeting {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    vec![("Meeting started", started.to_owned())]
}

#[cfg(feature = "hydrate")]
async fn run(harness: Harness, values: FormValues) -> Result<ResultRows, wire::ApiError> {
    use crate::net::api;
    match harness {
        Harness::Login => api::meet_login(&login_request(&values)).await.map(login_rows),
        Harness::Create => api::meet_create(&create_request(&values)).await.map(create_rows),
        Harness::Join => api::meet_join(&join_request(&values)).await.map(join_rows),
    }
}

#[component]
fn HarnessSection(harness: Harness, form: RwSignal<FormState>, result: RwSignal<Option<ResultRows>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(values) = begin_submit(form, |f| f.values.clone()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = run(harness, values).await;
            form.try_update(|f| f.submitting = false);
            match outcome {
                Ok(rows) => {
                    result.try_update(|r| *r = Some(rows));
                    show_toast(toasts, harness.done_toast(), ToastVariant::Success);
                }
                Err(e) => {
                    log::error!("api testing: {} failed: {e}", harness.title());
                    show_toast(toasts, harness.failed_toast(), ToastVariant::Destructive);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (values, toasts);
    };

    let result_view = move || {
        result.get().map(|rows| {
            view! {
                <dl class="harness__result">
                    {rows.into_iter().map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> }).collect_view()}
                </dl>
            }
        })
    };

    view! {
        <section class="harness">
            <h2 class="harness__title">{format!("Meet {}", harness.title())}</h2>
            <form class="harness__form" on:submit=on_submit novalidate=true>
                {form
                    .with_untracked(|f| f.schema.fields.clone())
                    .into_iter()
                    .map(|field| view! { <FormField field=field form=form/> })
                    .collect_view()}
                <button class="btn btn--primary" type="submit" disabled=move || !form.with(FormState::can_submit)>
                    "Test"
                </button>
            </form>
            {result_view}
        </section>
    }
}

#[component]
pub fn ApiTestingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(session, use_navigate());

    let sections = [Harness::Login, Harness::Create, Harness::Join]
        .map(|harness| (harness, RwSignal::new(FormState::new(harness.schema())), RwSignal::new(None::<ResultRows>)));

    let on_init = move |_| {
        for (_, form, result) in sections {
            form.update(FormState::clear);
            result.set(None);
        }
        show_toast(toasts, "Initialized", ToastVariant::Cancel);
    };

    view! {
        <Layout title="API Testing" section="Access Control">
            <div class="harness-toolbar">
                <button class="btn" on:click=on_init>
                    "Init"
                </button>
            </div>
            <div class="harness-grid">
                {sections
                    .into_iter()
                    .map(|(harness, form, result)| view! { <HarnessSection harness=harness form=form result=result/> })
                    .collect_view()}
            </div>
        </Layout>
    }
}
