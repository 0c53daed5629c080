use std::collections::BTreeSet;

use crate::foundation::core::PageIndex;

/// Result of a host image load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    /// The image decoded.
    Loaded,
    /// The image failed; it is still treated as resident and shown blank.
    Failed,
}

/// Working set of resident page images plus loads still in flight.
#[derive(Clone, Debug, Default)]
pub struct LoadedSet {
    resident: BTreeSet<PageIndex>,
    in_flight: BTreeSet<PageIndex>,
}

impl LoadedSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the page is resident (loaded or failed).
    pub fn contains(&self, page: PageIndex) -> bool {
        self.resident.contains(&page)
    }

    /// `true` when a load for the page was requested and has not completed.
    pub fn is_pending(&self, page: PageIndex) -> bool {
        self.in_flight.contains(&page)
    }

    /// `true` when the page needs no new load request.
    pub fn is_known(&self, page: PageIndex) -> bool {
        self.contains(page) || self.is_pending(page)
    }

    /// Record a load request. Returns `false` when the page is already resident or pending.
    pub fn request(&mut self, page: PageIndex) -> bool {
        if self.is_known(page) {
            return false;
        }
        self.in_flight.insert(page)
    }

    /// Record load completion. Failures become resident too, so they are never retried.
    ///
    /// Returns `true` when the page was newly made resident.
    pub fn complete(&mut self, page: PageIndex, outcome: LoadOutcome) -> bool {
        self.in_flight.remove(&page);
        if outcome == LoadOutcome::Failed {
            tracing::warn!(page = page.0, "page image failed to load; showing blank");
        }
        self.resident.insert(page)
    }

    /// Drop a resident page. Returns `true` when it was resident.
    pub fn evict(&mut self, page: PageIndex) -> bool {
        self.resident.remove(&page)
    }

    /// Resident pages in ascending order.
    pub fn resident(&self) -> impl Iterator<Item = PageIndex> + '_ {
        self.resident.iter().copied()
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// `true` when nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Forget everything, including in-flight requests.
    pub fn clear(&mut self) {
        self.resident.clear();
        self.in_flight.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preload/loaded.rs"]
mod tests;
