//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::SiteHeader;
use crate::pages::{product::ProductPage, products::ProductsPage, where_to_buy::WhereToBuyPage};
use crate::state::shortlist::ShortlistState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shortlist context (comparison + recently viewed) and sets up
/// client-side routing. Listing, configurator and menu state are page- or
/// component-local and derived from the URL where it matters.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shortlist = RwSignal::new(ShortlistState::default());
    provide_context(shortlist);

    // Local storage is browser-only; SSR renders an empty shortlist.
    #[cfg(feature = "hydrate")]
    Effect::new(move || shortlist.set(crate::util::storage::load_shortlist()));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Sensor Storefront"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProductsPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=(StaticSegment("product"), ParamSegment("slug")) view=ProductPage/>
                    <Route path=StaticSegment("where-to-buy") view=WhereToBuyPage/>
                </Routes>
            </main>
        </Router>
    }
}
