//! Sticky bar listing the products picked for comparison.

use leptos::prelude::*;

use crate::state::shortlist::ShortlistState;
use crate::util::storage::save_shortlist;

#[component]
pub fn CompareBar() -> impl IntoView {
    let shortlist = expect_context::<RwSignal<ShortlistState>>();

    let remove = move |id: String| {
        shortlist.update(|s| {
            s.comparison.remove(&id);
            save_shortlist(s);
        });
    };
    let clear = move |_| {
        shortlist.update(|s| {
            s.comparison.clear();
            save_shortlist(s);
        });
    };

    view! {
        <Show when=move || shortlist.with(|s| !s.comparison.is_empty())>
            <aside class="compare-bar" aria-label="Product comparison">
                <span class="compare-bar__title">{move || shortlist.with(ShortlistState::compare_label)}</span>
                <ul class="compare-bar__items">
                    {move || {
                        shortlist
                            .with(|s| s.comparison.items().to_vec())
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <li class="compare-bar__item">
                                        <a href=format!("/product/{}", item.slug)>{item.name}</a>
                                        <button
                                            class="compare-bar__remove"
                                            aria-label="Remove from comparison"
                                            on:click=move |_| remove(id.clone())
                                        >
                                            "\u{d7}"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <button class="btn btn--link" on:click=clear>
                    "Clear"
                </button>
            </aside>
        </Show>
    }
}
