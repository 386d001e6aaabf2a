//! Numbered page navigation with collapsed gaps.

use catalog::listing::PageLink;
use leptos::prelude::*;

#[component]
pub fn Pagination(page: u32, total_pages: u32, links: Vec<PageLink>, on_page: Callback<u32>) -> impl IntoView {
    if total_pages <= 1 {
        return ().into_any();
    }

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button class="pagination__step" disabled={page <= 1} on:click=move |_| on_page.run(page.saturating_sub(1))>
                "Previous"
            </button>
            {links
                .into_iter()
                .map(|link| match link {
                    PageLink::Page(n) => {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--current={n == page}
                                aria-current={(n == page).then_some("page")}
                                on:click=move |_| on_page.run(n)
                            >
                                {n}
                            </button>
                        }
                            .into_any()
                    }
                    PageLink::Gap => view! { <span class="pagination__gap">"\u{2026}"</span> }.into_any(),
                })
                .collect::<Vec<_>>()}
            <button class="pagination__step" disabled={page >= total_pages} on:click=move |_| on_page.run(page + 1)>
                "Next"
            </button>
        </nav>
    }
    .into_any()
}
