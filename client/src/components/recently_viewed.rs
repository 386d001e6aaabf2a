//! "Recently viewed" strip on the product page.

use leptos::prelude::*;

use crate::state::shortlist::ShortlistState;

/// Recently viewed products other than `exclude_id`.
#[component]
pub fn RecentlyViewed(#[prop(into)] exclude_id: Signal<String>) -> impl IntoView {
    let shortlist = expect_context::<RwSignal<ShortlistState>>();

    let items = move || {
        let exclude = exclude_id.get();
        shortlist.with(|s| s.recent.excluding(&exclude).map(|v| v.product.clone()).collect::<Vec<_>>())
    };

    view! {
        <Show when=move || !items().is_empty()>
            <section class="recently-viewed">
                <h2>"Recently Viewed"</h2>
                <ul class="recently-viewed__list">
                    {move || {
                        items()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <li class="recently-viewed__item">
                                        <a href=format!("/product/{}", p.slug)>
                                            {p.image.map(|src| view! { <img src=src alt="" loading="lazy"/> })}
                                            <span class="recently-viewed__name">{p.name}</span>
                                            {p.price.map(|price| view! { <span class="recently-viewed__price">{price}</span> })}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </Show>
    }
}
