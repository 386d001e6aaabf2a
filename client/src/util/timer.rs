//! A single rescheduleable timeout owned by a component.
//!
//! Scheduling replaces (and so cancels) the pending callback. The handle
//! lives in the component's reactive owner, so unmounting the component
//! drops it, which clears the browser timeout.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TimerSlot {
    #[cfg(feature = "hydrate")]
    handle: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            handle: StoredValue::new_local(None),
        }
    }

    /// Run `callback` after `delay_ms`, cancelling whatever was pending.
    pub fn schedule(self, delay_ms: u64, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let delay = u32::try_from(delay_ms).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(delay, callback);
            self.handle.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    pub fn cancel(self) {
        #[cfg(feature = "hydrate")]
        self.handle.set_value(None);
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
