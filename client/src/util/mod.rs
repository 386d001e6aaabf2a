//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clock, timers, history, share
//! sheet, local storage) from page and component logic. Each compiles to a
//! no-op on the server so components can call them unconditionally.

pub mod clock;
pub mod share;
pub mod storage;
pub mod teardown;
pub mod timer;
pub mod url;
