//! Sort order dropdown.

use catalog::listing::SortOrder;
use leptos::prelude::*;

#[component]
pub fn SortSelect(value: Signal<SortOrder>, on_change: Callback<SortOrder>) -> impl IntoView {
    view! {
        <label class="sort-select">
            <span class="sort-select__label">"Sort by"</span>
            <select on:change=move |ev| {
                if let Some(order) = SortOrder::parse(&event_target_value(&ev)) {
                    on_change.run(order);
                }
            }>
                {SortOrder::ALL
                    .into_iter()
                    .map(|order| {
                        view! {
                            <option value=order.as_str() selected=move || value.get() == order>
                                {order.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
