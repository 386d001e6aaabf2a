//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (URL sync, fetching, timers)
//! and delegates rendering details to `components`.

pub mod product;
pub mod products;
pub mod where_to_buy;
