//! Product detail page with the variation configurator.
//!
//! DESIGN
//! ======
//! The product payload comes from `/api/products/{slug}`; variation matching
//! then runs entirely in the browser against that payload. Selections are
//! mirrored to the query string with `replaceState` so a configured page can
//! be bookmarked or shared without polluting history.

use catalog::share::ShareOutcome;
use catalog::shortlist::ProductSummary;
use catalog::variation::Feedback;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::recently_viewed::RecentlyViewed;
use crate::components::share_button::ShareButton;
use crate::components::variation_selector::VariationSelector;
use crate::state::configurator::ConfiguratorState;
use crate::state::shortlist::ShortlistState;
use crate::util::clock::now_ms;
use crate::util::storage::save_shortlist;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let shortlist = expect_context::<RwSignal<ShortlistState>>();

    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let detail = LocalResource::new(move || {
        let slug = slug.get();
        async move { crate::net::api::fetch_product(&slug).await }
    });
    let state = RwSignal::new(ConfiguratorState::default());

    Effect::new(move || match detail.get() {
        Some(Some(detail)) => {
            let search = location.search.get_untracked();
            let summary = ProductSummary::from(&detail.product);
            let rebuilt = state.try_update(|s| s.load(detail.product, &search)).unwrap_or(false);
            if rebuilt {
                shortlist.update(|s| {
                    s.recent.record(summary, now_ms());
                    save_shortlist(s);
                });
            }
        }
        Some(None) => state.update(ConfiguratorState::unload),
        None => {}
    });

    let write_url = move |query: &str| {
        crate::util::url::replace_query(&format!("/product/{}", slug.get_untracked()), query);
    };
    let on_select = Callback::new(move |(attribute, value): (String, String)| {
        if let Some(query) = state.try_update(|s| s.select(&attribute, &value)) {
            write_url(&query);
        }
    });
    let on_reset = move |_| {
        if let Some(query) = state.try_update(ConfiguratorState::reset) {
            write_url(&query);
        }
    };
    let on_share = Callback::new(move |outcome: ShareOutcome| state.update(|s| s.record_share(outcome)));

    let controls = Signal::derive(move || state.with(ConfiguratorState::controls));
    let share_link = Signal::derive(move || state.with(|s| s.share_link(&crate::util::url::origin())));
    let title = Signal::derive(move || state.with(|s| s.product().map(|p| p.name.clone()).unwrap_or_default()));
    let exclude_id = Signal::derive(move || state.with(|s| s.product().map(|p| p.id.clone()).unwrap_or_default()));

    view! {
        {move || match detail.get() {
            None => view! { <p class="product-page__loading">"Loading product\u{2026}"</p> }.into_any(),
            Some(None) => {
                view! {
                    <section class="product-page product-page--missing">
                        <h1>"Product not found"</h1>
                        <a href="/products">"Back to all products"</a>
                    </section>
                }
                    .into_any()
            }
            Some(Some(_)) => {
                view! {
                    <article class="product-page">
                        {move || {
                            state
                                .with(|s| s.product().cloned())
                                .map(|product| {
                                    view! {
                                        <div class="product-page__media">
                                            {product.image.map(|src| view! { <img src=src alt=product.name.clone()/> })}
                                        </div>
                                        <header class="product-page__header">
                                            <h1>{product.name.clone()}</h1>
                                            {product
                                                .short_description
                                                .map(|text| view! { <p class="product-page__summary">{text}</p> })}
                                        </header>
                                    }
                                })
                        }}
                        <p class="product-page__price">
                            {move || {
                                state
                                    .with(|s| s.display_price().map(str::to_owned))
                                    .unwrap_or_else(|| "Call for pricing".to_owned())
                            }}
                        </p>
                        <Show when=move || state.with(ConfiguratorState::is_configurable)>
                            <section class="configurator">
                                <VariationSelector controls=controls on_select=on_select/>
                                <ConfigurationFeedback feedback=Signal::derive(move || state.with(ConfiguratorState::feedback))/>
                                <div class="configurator__actions">
                                    <button type="button" class="btn btn--link" on:click=on_reset>
                                        "Reset selections"
                                    </button>
                                    <ShareButton link=share_link title=title on_result=on_share/>
                                </div>
                                <p class="configurator__notice" role="status" aria-live="polite">
                                    {move || state.with(ConfiguratorState::share_notice)}
                                </p>
                            </section>
                        </Show>
                        <RecentlyViewed exclude_id=exclude_id/>
                    </article>
                }
                    .into_any()
            }
        }}
    }
}

/// Summary box under the selector controls.
#[component]
fn ConfigurationFeedback(feedback: Signal<Feedback>) -> impl IntoView {
    view! {
        <div
            class="configurator__feedback"
            class:configurator__feedback--invalid=move || feedback.with(|f| matches!(f, Feedback::InvalidConfiguration))
            aria-live="polite"
        >
            {move || {
                let feedback = feedback.get();
                let message = feedback.message();
                match feedback {
                    Feedback::Configured { part_number, price, stock } => {
                        view! {
                            <p class="configurator__message">{message}</p>
                            <dl class="configurator__details">
                                <dt>"Part number"</dt>
                                <dd>{part_number}</dd>
                                <dt>"Price"</dt>
                                <dd>{price.unwrap_or_else(|| "Call for pricing".to_owned())}</dd>
                                <dt>"Availability"</dt>
                                <dd class:configurator__stock--out={!stock.is_orderable()}>{stock.label()}</dd>
                            </dl>
                        }
                            .into_any()
                    }
                    Feedback::Prompt { .. } | Feedback::InvalidConfiguration => {
                        view! { <p class="configurator__message">{message}</p> }.into_any()
                    }
                }
            }}
        </div>
    }
}
