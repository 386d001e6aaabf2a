//! Wall-clock milliseconds for the timing state machines.

/// Milliseconds since the Unix epoch. Always `0` on the server.
// Date::now() is a non-negative integral f64 well inside u64 range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now().max(0.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
