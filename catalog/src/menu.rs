//! Header mega menu: navigation config and hover-intent state machine.
//!
//! DESIGN
//! ======
//! Fast pointer transits across the menu bar must not flash panels open, and
//! moving diagonally from a trigger into its panel must not close it. Both are
//! handled with one pending deadline:
//!
//! ```text
//!            enter (80ms)          due
//! Closed ───────────────► Opening ─────► Open
//!   ▲                       │ leave       │ leave (140ms)
//!   │         due           ▼             ▼
//!   └──────────────────── Closed ◄──── Closing ── enter(same) ──► Open
//! ```
//!
//! Only one top-level item is ever visible. Switching from an open item to a
//! neighbour keeps the current panel on screen until the new open delay has
//! elapsed, then swaps. Click, Escape and outside clicks act immediately.
//!
//! The machine owns no timer. Every transition takes `now_ms`; the host keeps
//! a single cancellable timeout armed for [`MegaMenu::next_deadline`] and
//! calls [`MegaMenu::advance`] when it fires.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use serde::{Deserialize, Serialize};

/// Hover dwell before a panel opens.
pub const OPEN_DELAY_MS: u64 = 80;
/// Grace period before an open panel closes after the pointer leaves.
pub const CLOSE_DELAY_MS: u64 = 140;

// =============================================================================
// NAVIGATION CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short badge such as "New".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// Promotional block shown beside the link columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Featured {
    pub title: String,
    pub description: String,
    pub href: String,
    pub cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A top-level header entry. Items without columns are plain links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub columns: Vec<NavColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<Featured>,
}

impl NavItem {
    #[must_use]
    pub fn has_panel(&self) -> bool {
        !self.columns.is_empty() || self.featured.is_some()
    }
}

// =============================================================================
// STATE MACHINE
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuPhase {
    #[default]
    Closed,
    /// `index` opens at `due_ms`. `shown` is the item still on screen while
    /// switching from a previously open panel.
    Opening { index: usize, due_ms: u64, shown: Option<usize> },
    Open { index: usize },
    /// `index` stays on screen until `due_ms`.
    Closing { index: usize, due_ms: u64 },
}

/// Keys the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Escape,
    Other,
}

impl MenuKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        if key == "Escape" { Self::Escape } else { Self::Other }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MegaMenu {
    phase: MenuPhase,
}

impl MegaMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Item whose panel is currently visible.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        match self.phase {
            MenuPhase::Closed => None,
            MenuPhase::Opening { shown, .. } => shown,
            MenuPhase::Open { index } | MenuPhase::Closing { index, .. } => Some(index),
        }
    }

    /// Closed with nothing pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == MenuPhase::Closed
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open_index() == Some(index)
    }

    /// When the host should next call [`advance`](Self::advance).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match self.phase {
            MenuPhase::Opening { due_ms, .. } | MenuPhase::Closing { due_ms, .. } => Some(due_ms),
            MenuPhase::Closed | MenuPhase::Open { .. } => None,
        }
    }

    /// Pointer or focus entered item `index` (trigger or panel).
    pub fn pointer_enter(&mut self, index: usize, now_ms: u64) {
        let due_ms = now_ms.saturating_add(OPEN_DELAY_MS);
        self.phase = match self.phase {
            MenuPhase::Closed => MenuPhase::Opening { index, due_ms, shown: None },
            MenuPhase::Opening { index: pending, due_ms: pending_due, shown } => {
                if pending == index {
                    MenuPhase::Opening { index, due_ms: pending_due, shown }
                } else if shown == Some(index) {
                    MenuPhase::Open { index }
                } else {
                    MenuPhase::Opening { index, due_ms, shown }
                }
            }
            MenuPhase::Open { index: current } | MenuPhase::Closing { index: current, .. } => {
                if current == index {
                    MenuPhase::Open { index }
                } else {
                    MenuPhase::Opening { index, due_ms, shown: Some(current) }
                }
            }
        };
    }

    /// Pointer or focus left the menu item.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        let due_ms = now_ms.saturating_add(CLOSE_DELAY_MS);
        self.phase = match self.phase {
            MenuPhase::Opening { shown: None, .. } => MenuPhase::Closed,
            MenuPhase::Opening { shown: Some(index), .. } | MenuPhase::Open { index } => {
                MenuPhase::Closing { index, due_ms }
            }
            other => other,
        };
    }

    /// Fire the pending transition if its deadline has passed. Returns `true`
    /// when the visible item changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let before = self.open_index();
        self.phase = match self.phase {
            MenuPhase::Opening { index, due_ms, .. } if now_ms >= due_ms => MenuPhase::Open { index },
            MenuPhase::Closing { due_ms, .. } if now_ms >= due_ms => MenuPhase::Closed,
            other => other,
        };
        before != self.open_index()
    }

    /// Click on a trigger: open it, or close it if it is the visible item.
    pub fn toggle(&mut self, index: usize) {
        self.phase = if self.is_open(index) {
            MenuPhase::Closed
        } else {
            MenuPhase::Open { index }
        };
    }

    pub fn close_now(&mut self) {
        self.phase = MenuPhase::Closed;
    }

    /// Returns `true` when the key was consumed.
    pub fn key(&mut self, key: MenuKey) -> bool {
        match key {
            MenuKey::Escape if self.phase != MenuPhase::Closed => {
                self.close_now();
                true
            }
            _ => false,
        }
    }

    /// Click landed outside the header.
    pub fn outside_click(&mut self) {
        self.close_now();
    }
}
