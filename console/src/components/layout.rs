//! Authenticated page chrome: sidebar, header, breadcrumb, footer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::session_store;

#[derive(Clone, Copy)]
struct NavItem {
    label: &'static str,
    href: &'static str,
    /// Route prefix that marks the item active.
    prefix: &'static str,
}

const TOP_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/home", prefix: "/home" },
    NavItem { label: "Dashboard", href: "/dashboard", prefix: "/dashboard" },
];

const ACCESS_CONTROL: &[NavItem] = &[
    NavItem { label: "Companies", href: "/companies/list", prefix: "/companies" },
    NavItem { label: "Users", href: "/users/list", prefix: "/users" },
    NavItem { label: "User Groups", href: "/userGroups/list", prefix: "/userGroups" },
    NavItem { label: "API Testing", href: "/api-testing", prefix: "/api-testing" },
];

fn nav_link(item: NavItem, path: Memo<String>) -> impl IntoView {
    let class = move || {
        if path.with(|p| p.starts_with(item.prefix)) {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };
    view! {
        <a class=class href=item.href title=item.label>
            <span class="sidebar__label">{item.label}</span>
        </a>
    }
}

#[component]
pub fn Layout(
    #[prop(into)] title: String,
    /// Middle breadcrumb segment, e.g. `Access Control`.
    #[prop(optional)]
    section: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let path = use_location().pathname;
    let collapsed = RwSignal::new(false);
    let access_open = RwSignal::new(true);

    let on_logout = move |_| {
        session_store::clear();
        session.update(SessionState::sign_out);
        navigate("/login", NavigateOptions::default());
    };

    let sidebar_class = move || if collapsed.get() { "sidebar sidebar--collapsed" } else { "sidebar" };
    let user_name = move || session.with(|s| s.display_name().unwrap_or_default().to_owned());
    let crumb_title = title.clone();

    view! {
        <div class="layout">
            <aside class=sidebar_class>
                <div class="sidebar__brand">
                    <span class="sidebar__logo">"M"</span>
                    <span class="sidebar__label">"Meeting Admin"</span>
                    <button
                        class="sidebar__toggle"
                        title="Toggle sidebar"
                        on:click=move |_| collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                </div>
                <nav class="sidebar__nav">
                    {TOP_ITEMS.iter().map(|item| nav_link(*item, path)).collect_view()}
                    <button
                        class="sidebar__group"
                        on:click=move |_| access_open.update(|open| *open = !*open)
                    >
                        <span class="sidebar__label">"Access Control"</span>
                        <span class="sidebar__caret">{move || if access_open.get() { "▾" } else { "▸" }}</span>
                    </button>
                    <Show when=move || access_open.get()>
                        <div class="sidebar__subnav">
                            {ACCESS_CONTROL.iter().map(|item| nav_link(*item, path)).collect_view()}
                        </div>
                    </Show>
                </nav>
            </aside>
            <div class="layout__main">
                <header class="layout__header">
                    <nav class="breadcrumb" aria-label="Breadcrumb">
                        <a href="/home">"Home"</a>
                        {section.map(|s| view! { <span class="breadcrumb__sep">"/"</span> <span>{s}</span> })}
                        <span class="breadcrumb__sep">"/"</span>
                        <span class="breadcrumb__current">{crumb_title}</span>
                    </nav>
                    <div class="layout__user">
                        <span class="layout__user-name">{user_name}</span>
                        <button class="btn btn--ghost" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </header>
                <h1 class="layout__title">{title}</h1>
                <main class="layout__content">{children()}</main>
                <footer class="layout__footer">"© Meeting"</footer>
            </div>
        </div>
    }
}
