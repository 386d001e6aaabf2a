//! Distributor locator.

use catalog::distributor::{Distributor, Region};
use leptos::prelude::*;

use crate::state::locator::LocatorState;

const TABS: [Option<Region>; 4] = [None, Some(Region::Usa), Some(Region::Europe), Some(Region::International)];

#[component]
pub fn WhereToBuyPage() -> impl IntoView {
    let directory = LocalResource::new(|| crate::net::api::fetch_distributors());
    let state = RwSignal::new(LocatorState::default());

    Effect::new(move || {
        if let Some(Some(dir)) = directory.get() {
            state.set(LocatorState::new(dir.distributors));
        }
    });

    view! {
        <section class="locator">
            <header class="locator__header">
                <h1>"Where to Buy"</h1>
                <p>"Find an authorized distributor near you."</p>
            </header>
            <div class="locator__tabs" role="tablist">
                {TABS
                    .into_iter()
                    .map(|region| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="locator__tab"
                                class:locator__tab--active=move || state.with(|s| s.query.region == region)
                                aria-selected=move || state.with(|s| s.query.region == region).to_string()
                                on:click=move |_| state.update(|s| s.set_region(region))
                            >
                                {move || state.with(|s| s.tab_label(region))}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <input
                type="search"
                class="locator__search"
                placeholder="Search by name or location"
                prop:value=move || state.with(|s| s.query.search.clone())
                on:input=move |ev| state.update(|s| s.set_search(&event_target_value(&ev)))
            />
            {move || match directory.get() {
                None => view! { <p class="locator__status">"Loading distributors\u{2026}"</p> }.into_any(),
                Some(None) => {
                    view! { <p class="locator__status">"The distributor directory is unavailable right now."</p> }
                        .into_any()
                }
                Some(Some(_)) => {
                    view! {
                        <p class="locator__count" aria-live="polite">{move || state.with(LocatorState::result_label)}</p>
                        <ul class="locator__results">
                            {move || {
                                state
                                    .with(|s| s.visible().into_iter().cloned().collect::<Vec<_>>())
                                    .into_iter()
                                    .map(|d| view! { <DistributorCard distributor=d/> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <Show when=move || state.with(|s| s.visible().is_empty())>
                            <p class="locator__empty">
                                "No distributors match your search. "
                                <button type="button" class="btn btn--link" on:click=move |_| state.update(LocatorState::reset)>
                                    "Show all distributors"
                                </button>
                            </p>
                        </Show>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn DistributorCard(distributor: Distributor) -> impl IntoView {
    let Distributor { name, tier, location, website, logo, phone, email, specialties, .. } = distributor;
    let tier_class = format!("distributor-card distributor-card--{tier:?}").to_lowercase();

    view! {
        <li class=tier_class>
            {logo.map(|src| view! { <img class="distributor-card__logo" src=src alt=name.clone()/> })}
            <h2 class="distributor-card__name">{name.clone()}</h2>
            <span class="distributor-card__tier">{tier.label()}</span>
            <p class="distributor-card__location">{location}</p>
            <a class="distributor-card__website" href=website target="_blank" rel="noopener">
                "Visit website"
            </a>
            {phone.map(|p| view! { <a class="distributor-card__phone" href=format!("tel:{p}")>{p.clone()}</a> })}
            {email.map(|e| view! { <a class="distributor-card__email" href=format!("mailto:{e}")>{e.clone()}</a> })}
            {(!specialties.is_empty())
                .then(|| {
                    view! {
                        <ul class="distributor-card__specialties">
                            {specialties.into_iter().map(|s| view! { <li>{s}</li> }).collect::<Vec<_>>()}
                        </ul>
                    }
                })}
        </li>
    }
}
