//! Taxonomy filter checkboxes for the listing sidebar.

use std::collections::BTreeMap;

use catalog::listing::Facet;
use catalog::query::ListingQuery;
use leptos::prelude::*;

/// `"enclosure-style"` -> `"Enclosure Style"`.
fn category_title(category: &str) -> String {
    category
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One fieldset per taxonomy category. Ticking a box reports
/// `(category, term slug, checked)`.
#[component]
pub fn FilterPanel(
    facets: Signal<BTreeMap<String, Vec<Facet>>>,
    query: Signal<ListingQuery>,
    on_toggle: Callback<(String, String, bool)>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let active = move || query.with(ListingQuery::active_filter_count);

    view! {
        <aside class="filter-panel" aria-label="Filter products">
            <header class="filter-panel__header">
                <h2>"Filters"</h2>
                <Show when=move || { active() > 0 }>
                    <button class="btn btn--link" on:click=move |_| on_clear.run(())>
                        {move || format!("Clear all ({})", active())}
                    </button>
                </Show>
            </header>
            {move || {
                facets
                    .get()
                    .into_iter()
                    .filter(|(_, terms)| !terms.is_empty())
                    .map(|(category, terms)| {
                        view! {
                            <fieldset class="filter-panel__group">
                                <legend>{category_title(&category)}</legend>
                                {terms
                                    .into_iter()
                                    .map(|facet| {
                                        let category = category.clone();
                                        let slug = facet.slug.clone();
                                        let checked = {
                                            let (category, slug) = (category.clone(), slug.clone());
                                            move || query.with(|q| q.is_active(&category, &slug))
                                        };
                                        view! {
                                            <label class="filter-panel__option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    on:change=move |ev| {
                                                        on_toggle.run((category.clone(), slug.clone(), event_target_checked(&ev)));
                                                    }
                                                />
                                                <span>{facet.name}</span>
                                                <span class="filter-panel__count">{format!("({})", facet.count)}</span>
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </fieldset>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </aside>
    }
}
