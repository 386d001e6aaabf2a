//! Reusable UI components for the storefront.
//!
//! ARCHITECTURE
//! ============
//! Components receive signals or plain data from pages and stay free of
//! routing concerns. Timing-sensitive behavior (mega-menu intent, filter
//! debounce) is driven by `catalog` state machines plus a [`TimerSlot`].
//!
//! [`TimerSlot`]: crate::util::timer::TimerSlot

pub mod compare_bar;
pub mod filter_panel;
pub mod header;
pub mod pagination;
pub mod product_card;
pub mod recently_viewed;
pub mod share_button;
pub mod sort_select;
pub mod variation_selector;
