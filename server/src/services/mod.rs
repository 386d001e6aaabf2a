//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the catalog index and its reload lifecycle so route
//! handlers can stay focused on protocol translation.

pub mod catalog;
pub mod refresh;
