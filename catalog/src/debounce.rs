//! Trailing-edge debounce as a plain deadline.
//!
//! Used for listing recomputation: every filter change calls
//! [`Debounce::touch`], which pushes the deadline out again. While a deadline
//! is pending the listing shows its "updating" state. The host arms one timer
//! for [`Debounce::due_ms`] and calls [`Debounce::fire`] when it goes off.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Delay after the last filter change before results are recomputed.
pub const FILTER_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    due_ms: Option<u64>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(FILTER_DEBOUNCE_MS)
    }
}

impl Debounce {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms, due_ms: None }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    #[must_use]
    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Record an event at `now_ms`, restarting the delay.
    pub fn touch(&mut self, now_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    /// Returns `true` exactly once, when the deadline has been reached.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }
}
