//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{
    api_testing::ApiTestingPage,
    dashboard::DashboardPage,
    entities::{
        CompanyAddPage, CompanyEditPage, CompanyListPage, UserAddPage, UserEditPage, UserGroupAddPage,
        UserGroupEditPage, UserGroupListPage, UserListPage,
    },
    forgot::ForgotPage,
    home::HomePage,
    loading::LoadingPage,
    login::LoginPage,
    reset_password::ResetPasswordPage,
    root::IndexPage,
};
use crate::state::{session::SessionState, toast::ToastState};
use crate::util::session_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Storage is browser-only; effects never run during SSR.
    Effect::new(move || {
        session.set(SessionState::restored(session_store::read()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/meetadmin.css"/>
        <Title text="Meeting Admin"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot") view=ForgotPage/>
                <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                <Route path=StaticSegment("loading") view=LoadingPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("companies"), StaticSegment("list")) view=CompanyListPage/>
                <Route path=(StaticSegment("companies"), StaticSegment("add")) view=CompanyAddPage/>
                <Route path=(StaticSegment("companies"), StaticSegment("edit"), ParamSegment("id")) view=CompanyEditPage/>
                <Route path=(StaticSegment("userGroups"), StaticSegment("list")) view=UserGroupListPage/>
                <Route path=(StaticSegment("userGroups"), StaticSegment("add")) view=UserGroupAddPage/>
                <Route
                    path=(StaticSegment("userGroups"), StaticSegment("edit"), ParamSegment("id"))
                    view=UserGroupEditPage
                />
                <Route path=(StaticSegment("users"), StaticSegment("list")) view=UserListPage/>
                <Route path=(StaticSegment("users"), StaticSegment("add")) view=UserAddPage/>
                <Route path=(StaticSegment("users"), StaticSegment("edit"), ParamSegment("id")) view=UserEditPage/>
                <Route path=StaticSegment("api-testing") view=ApiTestingPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
