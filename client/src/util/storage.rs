//! Local storage persistence for the shortlist.
//!
//! Reads and writes are best effort: private browsing or a full quota just
//! means the shortlist does not survive a reload.

use catalog::shortlist::{COMPARISON_STORAGE_KEY, RECENTLY_VIEWED_STORAGE_KEY};

use crate::state::shortlist::ShortlistState;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load both lists. Corrupt entries are logged and start empty.
pub fn load_shortlist() -> ShortlistState {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage();
        let read = |key: &str| storage.as_ref().and_then(|s| s.get_item(key).ok().flatten());
        let comparison = read(COMPARISON_STORAGE_KEY);
        let recent = read(RECENTLY_VIEWED_STORAGE_KEY);
        let (state, issues) = ShortlistState::restore(comparison.as_deref(), recent.as_deref());
        for issue in issues {
            log::debug!("discarding stored {}: {}", issue.key, issue.error);
        }
        state
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ShortlistState::default()
    }
}

/// Persist both lists.
pub fn save_shortlist(state: &ShortlistState) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        for (key, value) in [
            (COMPARISON_STORAGE_KEY, state.comparison_json()),
            (RECENTLY_VIEWED_STORAGE_KEY, state.recent_json()),
        ] {
            if let Err(e) = storage.set_item(key, &value) {
                log::debug!("failed to store {key}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, COMPARISON_STORAGE_KEY, RECENTLY_VIEWED_STORAGE_KEY);
    }
}
