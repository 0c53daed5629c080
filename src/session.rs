//! Per-visit viewer state that hosts inject into the components that need it.
//!
//! The crate never reads or writes browser storage itself. Hosts that want the state to
//! survive a reload serialize this struct wherever they like.

use std::collections::BTreeSet;

/// Which galleries this visitor has opened, plus one-shot intro flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionState {
    viewed: BTreeSet<String>,
    intro_seen: bool,
}

impl SessionState {
    /// Fresh session: nothing viewed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a gallery was opened. Returns `true` the first time.
    pub fn mark_viewed(&mut self, gallery: impl Into<String>) -> bool {
        let gallery = gallery.into();
        let first = self.viewed.insert(gallery);
        if first {
            tracing::trace!(viewed = self.viewed.len(), "gallery marked viewed");
        }
        first
    }

    /// `true` if the gallery was opened earlier in this session.
    pub fn has_viewed(&self, gallery: &str) -> bool {
        self.viewed.contains(gallery)
    }

    /// Number of distinct galleries opened.
    pub fn viewed_count(&self) -> usize {
        self.viewed.len()
    }

    /// Viewed gallery ids in sorted order.
    pub fn viewed(&self) -> impl Iterator<Item = &str> {
        self.viewed.iter().map(String::as_str)
    }

    /// Whether the opening reveal animation already played.
    pub fn intro_seen(&self) -> bool {
        self.intro_seen
    }

    /// Mark the opening reveal animation as played.
    pub fn mark_intro_seen(&mut self) {
        self.intro_seen = true;
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
