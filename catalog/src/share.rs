//! Shareable configuration links.
//!
//! The browser side tries the native share sheet first and falls back to the
//! clipboard. Neither failure is surfaced as an error: a cancelled share
//! sheet is normal and a blocked clipboard just leaves the URL bar as is.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use crate::query::{href, selection_to_query};
use crate::variation::SelectedAttributes;

/// Absolute link reproducing `selections` on the product page at `path`.
#[must_use]
pub fn share_url(origin: &str, path: &str, selections: &SelectedAttributes) -> String {
    let origin = origin.trim_end_matches('/');
    let link = href(path, &selection_to_query(selections));
    if link.starts_with('/') { format!("{origin}{link}") } else { format!("{origin}/{link}") }
}

/// What happened when the shopper pressed "Share".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share sheet.
    Shared,
    /// Written to the clipboard.
    Copied,
    /// The shopper dismissed the share sheet.
    Cancelled,
    /// Neither share nor clipboard is available or both failed.
    Unavailable,
}

impl ShareOutcome {
    /// Transient confirmation to show, if any.
    #[must_use]
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Copied => Some("Link copied to clipboard!"),
            Self::Shared | Self::Cancelled | Self::Unavailable => None,
        }
    }
}
