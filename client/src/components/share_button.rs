//! "Share configuration" button.

use catalog::share::ShareOutcome;
use leptos::prelude::*;

/// Shares `link` (or copies it) and reports what happened.
#[component]
pub fn ShareButton(
    link: Signal<Option<String>>,
    #[prop(into)] title: Signal<String>,
    on_result: Callback<ShareOutcome>,
) -> impl IntoView {
    let on_click = move |_| {
        let Some(url) = link.get_untracked() else {
            return;
        };
        let title = title.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::util::share::share_or_copy(&title, &url).await;
            on_result.run(outcome);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, url, on_result);
        }
    };

    view! {
        <button type="button" class="btn share-button" disabled=move || link.with(Option::is_none) on:click=on_click>
            "Share Configuration"
        </button>
    }
}
