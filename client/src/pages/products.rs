//! Product listing page: filters, sort, pagination.
//!
//! DESIGN
//! ======
//! The URL is the source of truth for the listing. Controls update
//! [`ListingState`] and rewrite the address bar in place; results are fetched
//! for `applied`, which trails the controls by the filter debounce. Results
//! from the previous query stay on screen while the next page loads, with an
//! `aria-live` status announcing the update.

use catalog::listing::{ListingPage, SortOrder};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::compare_bar::CompareBar;
use crate::components::filter_panel::FilterPanel;
use crate::components::pagination::Pagination;
use crate::components::product_card::ProductCard;
use crate::components::sort_select::SortSelect;
use crate::state::listing::ListingState;
use crate::util::clock::now_ms;
use crate::util::timer::TimerSlot;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let location = use_location();

    let state = RwSignal::new(ListingState::from_search(&location.search.get_untracked()));
    let applied = Memo::new(move |_| state.with(|s| s.applied.clone()));
    let results = LocalResource::new(move || {
        let query = applied.get();
        async move { crate::net::api::fetch_listing(&query).await }
    });
    let shown = RwSignal::new(None::<ListingPage>);
    let failed = RwSignal::new(false);
    let timer = TimerSlot::new();

    // Keep the last good page visible while the next one loads.
    Effect::new(move || match results.get() {
        Some(Some(page)) => {
            shown.set(Some(page));
            failed.set(false);
        }
        Some(None) => failed.set(true),
        None => {}
    });

    // Back/forward navigation changes the URL under us.
    Effect::new(move || {
        let search = location.search.get();
        state.update(|s| {
            if s.sync_from_search(&search).is_some() {
                timer.cancel();
            }
        });
    });

    // replaceState keeps the router's location untouched, so the sync
    // effect above only sees real history navigation.
    let write_url = move || {
        let path = location.pathname.get_untracked();
        crate::util::url::replace_query(&path, &state.with_untracked(ListingState::url_query));
    };

    let on_toggle = Callback::new(move |(category, slug, on): (String, String, bool)| {
        let due = state.try_update(|s| s.toggle_filter(&category, &slug, on, now_ms()));
        write_url();
        if let Some(due) = due {
            arm_refresh(state, timer, due);
        }
    });
    let on_clear = Callback::new(move |()| {
        let due = state.try_update(|s| s.clear_filters(now_ms()));
        write_url();
        if let Some(due) = due {
            arm_refresh(state, timer, due);
        }
    });
    let on_sort = Callback::new(move |sort: SortOrder| {
        state.update(|s| {
            s.set_sort(sort);
        });
        timer.cancel();
        write_url();
    });
    let on_page = Callback::new(move |page: u32| {
        state.update(|s| {
            s.set_page(page);
        });
        timer.cancel();
        write_url();
    });

    let facets = Signal::derive(move || shown.with(|p| p.as_ref().map(|p| p.facets.clone()).unwrap_or_default()));
    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let sort = Signal::derive(move || state.with(|s| s.query.sort));

    view! {
        <div class="listing-page">
            <FilterPanel facets=facets query=query on_toggle=on_toggle on_clear=on_clear/>
            <section class="listing-page__results">
                <header class="listing-page__toolbar">
                    <h1>"Products"</h1>
                    <SortSelect value=sort on_change=on_sort/>
                </header>
                <p class="listing-page__status" role="status" aria-live="polite">
                    {move || state.with(ListingState::status_message)}
                </p>
                <Show when=move || failed.get()>
                    <p class="listing-page__error">"Products could not be loaded. Please try again."</p>
                </Show>
                {move || {
                    shown
                        .get()
                        .map(|page| {
                            let summary = format!("{} \u{b7} {} products", page.summary_label(), page.total_items);
                            let links = page.links();
                            let (current, total) = (page.page, page.total_pages);
                            let empty = page.products.is_empty();
                            view! {
                                <p class="listing-page__summary">{summary}</p>
                                <Show when=move || empty>
                                    <p class="listing-page__empty">"No products match the selected filters."</p>
                                </Show>
                                <div class="listing-page__grid" class:listing-page__grid--stale=move || state.with(ListingState::is_updating)>
                                    {page
                                        .products
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product/> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <Pagination page=current total_pages=total links=links on_page=on_page/>
                            }
                        })
                }}
            </section>
            <CompareBar/>
        </div>
    }
}

/// Arm the debounce timer for `due_ms`. The callback only runs if no later
/// filter change replaced it, so it fires the debounce unconditionally.
fn arm_refresh(state: RwSignal<ListingState>, timer: TimerSlot, due_ms: u64) {
    timer.schedule(due_ms.saturating_sub(now_ms()), move || {
        state.update(|s| {
            let _ = s.fire(due_ms.max(now_ms()));
        });
    });
}
