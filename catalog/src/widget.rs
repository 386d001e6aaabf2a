//! Choose a selector widget for each configurable attribute.
//!
//! The configurator renders colors as swatches, either/or choices as a
//! toggle, short option lists as radio buttons and everything else as a
//! dropdown. Detection looks only at the attribute name and its options.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use serde::{Deserialize, Serialize};

use crate::product::ProductAttribute;

/// Options longer than this never render as radio buttons.
const RADIO_MAX_OPTION_LEN: usize = 50;

/// Swatch fill when a color name is not recognised.
pub const FALLBACK_SWATCH: &str = "#9CA3AF";

/// Checked in order; the first substring hit wins for partial matches.
const SWATCHES: &[(&str, &str)] = &[
    ("bright white", "#FFFFFF"),
    ("off white", "#F5F5DC"),
    ("cloud white", "#F0F0F0"),
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("silver", "#C0C0C0"),
    ("red", "#DC2626"),
    ("blue", "#1479BC"),
    ("green", "#16A34A"),
    ("yellow", "#FFC843"),
    ("orange", "#EA580C"),
    ("brown", "#92400E"),
    ("beige", "#D2B48C"),
    ("tan", "#D2B48C"),
];

/// Opposite pairs rendered as an on/off toggle.
const BINARY_PAIRS: &[(&str, &str)] = &[
    ("yes", "no"),
    ("display", "no display"),
    ("included", "not included"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    ColorSwatch,
    BinaryToggle,
    RadioGroup,
    Dropdown,
}

impl WidgetKind {
    #[must_use]
    pub fn detect(attribute: &ProductAttribute) -> Self {
        let name = attribute.name.to_lowercase();
        let label = attribute.label().to_lowercase();
        if name.contains("color") || label.contains("color") {
            return Self::ColorSwatch;
        }

        let options: Vec<String> = attribute.options.iter().map(|o| o.to_lowercase()).collect();
        let has = |needle: &str| options.iter().any(|o| o == needle);

        if options.len() == 2 {
            let paired = BINARY_PAIRS.iter().any(|(on, off)| has(on) && has(off));
            let with_without = options
                .iter()
                .any(|o| o.starts_with("with ") || o.starts_with("without "));
            if paired || with_without {
                return Self::BinaryToggle;
            }
        }

        if (2..=4).contains(&options.len())
            && attribute
                .options
                .iter()
                .all(|o| o.chars().count() <= RADIO_MAX_OPTION_LEN)
        {
            return Self::RadioGroup;
        }

        Self::Dropdown
    }
}

/// Compact label for long option text:
/// `"Standard Range (10 ranges from -5 to +5 WC)"` -> `"Standard Range"`.
#[must_use]
pub fn short_label(option: &str) -> String {
    let mut stripped = String::with_capacity(option.len());
    let mut depth = 0usize;
    for c in option.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }
    stripped
        .trim()
        .split(['-', '–', '—', ','])
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Whether `option` is the "on" side of a binary toggle.
#[must_use]
pub fn is_positive_option(option: &str) -> bool {
    let lower = option.to_lowercase();
    matches!(lower.as_str(), "yes" | "display" | "included")
        || lower.starts_with("with ")
        || lower.starts_with("included ")
}

/// Swatch fill for a color option name.
#[must_use]
pub fn color_hex(color_name: &str) -> &'static str {
    let normalized = color_name.trim().to_lowercase();
    SWATCHES
        .iter()
        .find(|(name, _)| *name == normalized)
        .or_else(|| SWATCHES.iter().find(|(name, _)| normalized.contains(name)))
        .map_or(FALLBACK_SWATCH, |(_, hex)| *hex)
}
