//! Attribute controls for the product configurator.
//!
//! Each attribute renders with the widget picked for it: color swatches,
//! an on/off toggle, a radio group or a dropdown. Options that no longer lead
//! to a sold variation stay selectable but are marked unavailable; choosing
//! one produces the "Invalid Configuration" feedback.

use catalog::widget::{WidgetKind, color_hex, is_positive_option, short_label};
use leptos::prelude::*;

use crate::state::configurator::AttributeControl;

/// All controls for one product. Selecting reports `(attribute slug, value)`;
/// an empty value clears the attribute.
#[component]
pub fn VariationSelector(controls: Signal<Vec<AttributeControl>>, on_select: Callback<(String, String)>) -> impl IntoView {
    view! {
        <div class="variation-selector">
            <For
                each=move || controls.get()
                key=|control| (control.slug.clone(), control.selected.clone(), control.available.clone())
                children=move |control| view! { <AttributeField control=control on_select=on_select/> }
            />
        </div>
    }
}

#[component]
fn AttributeField(control: AttributeControl, on_select: Callback<(String, String)>) -> impl IntoView {
    let AttributeControl { slug, label, widget, options, available, selected } = control;
    let field_id = format!("attr-{slug}");
    let is_available = move |option: &str| available.iter().any(|a| a == option);

    let body = match widget {
        WidgetKind::ColorSwatch => options
            .iter()
            .map(|option| {
                let (slug, value) = (slug.clone(), option.clone());
                let pressed = selected.as_deref() == Some(option.as_str());
                view! {
                    <button
                        type="button"
                        class="swatch"
                        class:swatch--selected=pressed
                        class:swatch--unavailable={!is_available(option)}
                        style=format!("background-color: {}", color_hex(option))
                        title=option.clone()
                        aria-label=option.clone()
                        aria-pressed=pressed.to_string()
                        on:click=move |_| on_select.run((slug.clone(), value.clone()))
                    ></button>
                }
            })
            .collect::<Vec<_>>()
            .into_any(),
        WidgetKind::BinaryToggle | WidgetKind::RadioGroup => {
            let toggle = widget == WidgetKind::BinaryToggle;
            options
                .iter()
                .map(|option| {
                    let (slug, value) = (slug.clone(), option.clone());
                    let checked = selected.as_deref() == Some(option.as_str());
                    let text = if toggle { short_label(option) } else { option.clone() };
                    view! {
                        <label
                            class="option-pill"
                            class:option-pill--positive={toggle && is_positive_option(option)}
                            class:option-pill--unavailable={!is_available(option)}
                        >
                            <input
                                type="radio"
                                name=field_id.clone()
                                value=option.clone()
                                prop:checked=checked
                                on:change=move |_| on_select.run((slug.clone(), value.clone()))
                            />
                            <span>{text}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }
        WidgetKind::Dropdown => {
            let slug = slug.clone();
            view! {
                <select
                    id=field_id.clone()
                    on:change=move |ev| on_select.run((slug.clone(), event_target_value(&ev)))
                >
                    <option value="" selected=selected.is_none()>
                        "Choose an option"
                    </option>
                    {options
                        .iter()
                        .map(|option| {
                            let suffix = if is_available(option) { "" } else { " (unavailable)" };
                            view! {
                                <option value=option.clone() selected={selected.as_deref() == Some(option.as_str())}>
                                    {format!("{option}{suffix}")}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            }
                .into_any()
        }
    };

    view! {
        <fieldset class="variation-selector__field">
            <legend class="variation-selector__label">
                {label}
                {selected.clone().map(|v| view! { <span class="variation-selector__value">{format!(": {v}")}</span> })}
            </legend>
            <div class="variation-selector__options">{body}</div>
        </fieldset>
    }
}
