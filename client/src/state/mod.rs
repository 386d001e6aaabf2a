//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`listing`, `configurator`, `locator`) plus the
//! app-wide `shortlist`. Each model is plain data with methods taking
//! `now_ms` where timing matters, so components own the signals and timers
//! while the transitions stay unit-testable off the browser.

pub mod configurator;
pub mod listing;
pub mod locator;
pub mod shortlist;
