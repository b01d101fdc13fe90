use leptos::prelude::*;

/// Illustration-style placeholder shown instead of an empty table.
#[component]
pub fn EmptyState(
    title: &'static str,
    body: &'static str,
    #[prop(optional)] action_href: Option<String>,
    #[prop(optional)] action_label: Option<String>,
) -> impl IntoView {
    let action = action_href.zip(action_label).map(|(href, label)| {
        view! {
            <a class="btn btn--primary" href=href>
                {label}
            </a>
        }
    });

    view! {
        <div class="empty-state">
            <svg class="empty-state__icon" viewBox="0 0 48 48" aria-hidden="true">
                <rect x="8" y="10" width="32" height="28" rx="3"></rect>
                <line x1="14" y1="20" x2="34" y2="20"></line>
                <line x1="14" y1="28" x2="28" y2="28"></line>
            </svg>
            <h2 class="empty-state__title">{title}</h2>
            <p class="empty-state__body">{body}</p>
            {action}
        </div>
    }
}
