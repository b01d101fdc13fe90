//! List footer: totals, page size, and previous/next controls.

use leptos::prelude::*;
use wire::Pager;

#[cfg(test)]
#[path = "pagination_bar_test.rs"]
mod pagination_bar_test;

/// "from N" beside the current page.
pub fn page_count_label(pager: &Pager) -> String {
    format!("from {}", pager.total_pages)
}

#[component]
pub fn PaginationBar(#[prop(into)] pager: Signal<Pager>, on_prev: Callback<()>, on_next: Callback<()>) -> impl IntoView {
    view! {
        <footer class="pagination">
            <span class="pagination__total">"Total items " {move || pager.get().total_items}</span>
            <span class="pagination__size">"Items per page " {move || pager.get().page_size}</span>
            <div class="pagination__controls">
                <button
                    class="pagination__btn"
                    title="Previous page"
                    disabled=move || !pager.get().can_prev()
                    on:click=move |_| on_prev.run(())
                >
                    "‹"
                </button>
                <span class="pagination__page">{move || pager.get().page}</span>
                <button
                    class="pagination__btn"
                    title="Next page"
                    disabled=move || !pager.get().can_next()
                    on:click=move |_| on_next.run(())
                >
                    "›"
                </button>
                <span class="pagination__of">{move || pager.with(page_count_label)}</span>
            </div>
        </footer>
    }
}
