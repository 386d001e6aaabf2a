//! Product tile for the listing grid.

use catalog::product::Product;
use catalog::shortlist::ProductSummary;
use leptos::prelude::*;

use crate::state::shortlist::ShortlistState;

/// Image, name, price and a compare checkbox linking to the product page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let shortlist = expect_context::<RwSignal<ShortlistState>>();
    let notice = RwSignal::new(None::<&'static str>);

    let summary = ProductSummary::from(&product);
    let id = product.id.clone();
    let compared = move || shortlist.with(|s| s.comparison.contains(&id));
    let on_compare = move |_| {
        let mut result = None;
        shortlist.update(|s| {
            result = s.toggle_compare(summary.clone());
            crate::util::storage::save_shortlist(s);
        });
        notice.set(result);
    };

    let href = format!("/product/{}", product.slug);
    let price = product.display_price().unwrap_or("Call for pricing").to_owned();

    view! {
        <article class="product-card">
            <a class="product-card__link" href=href.clone()>
                {product
                    .image
                    .map(|src| view! { <img class="product-card__image" src=src alt="" loading="lazy"/> })}
                <h3 class="product-card__name">{product.name}</h3>
            </a>
            <p class="product-card__price">{price}</p>
            {product
                .short_description
                .map(|d| view! { <p class="product-card__summary">{d}</p> })}
            <div class="product-card__actions">
                <a class="btn btn--primary" href=href>
                    {if product.variations.is_empty() { "View Product" } else { "Configure" }}
                </a>
                <label class="product-card__compare">
                    <input type="checkbox" prop:checked=compared on:change=on_compare/>
                    "Compare"
                </label>
            </div>
            <Show when=move || notice.get().is_some()>
                <p class="product-card__notice" role="alert">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}
