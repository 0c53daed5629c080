use crate::foundation::core::{Direction, PageIndex, page_distance};
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::preload::loaded::LoadedSet;

/// Pages this close to the anchor load with no stagger delay (the neighbouring spread).
pub const IMMEDIATE_NEIGHBOR_PAGES: usize = 2;

/// Direction-biased preload window and eviction distance, in pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreloadPolicy {
    /// Window reach on the side the reader is heading toward.
    pub ahead: usize,
    /// Window reach on the side the reader came from.
    pub behind: usize,
    /// Resident pages farther than this from the anchor are unloaded.
    pub evict_distance: usize,
    /// Extra delay per page of distance beyond the immediate neighbours.
    pub stagger_ms: u64,
}

impl Default for PreloadPolicy {
    fn default() -> Self {
        Self {
            ahead: 6,
            behind: 2,
            evict_distance: 10,
            stagger_ms: 80,
        }
    }
}

/// One staggered load the host should start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadRequest {
    /// Page to load.
    pub page: PageIndex,
    /// Delay before starting the load.
    pub delay_ms: u64,
}

/// Output of [`PreloadPolicy::plan_window`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowPlan {
    /// Loads to start, nearest first.
    pub to_load: Vec<LoadRequest>,
    /// Resident pages to unload, ascending.
    pub to_evict: Vec<PageIndex>,
}

impl WindowPlan {
    /// `true` when there is nothing to do.
    pub fn is_empty(&self) -> bool {
        self.to_load.is_empty() && self.to_evict.is_empty()
    }
}

impl PreloadPolicy {
    /// Check the anti-thrash invariant: a single direction reversal must not pull an evicted
    /// page straight back into the window.
    pub fn validate(&self) -> FlipbookResult<()> {
        if self.ahead < self.behind {
            return Err(FlipbookError::config(format!(
                "preload ahead ({}) must be >= behind ({})",
                self.ahead, self.behind
            )));
        }
        let reach = self.ahead.max(self.behind);
        if self.evict_distance <= reach {
            return Err(FlipbookError::config(format!(
                "evict_distance ({}) must exceed the widest preload reach ({reach})",
                self.evict_distance
            )));
        }
        Ok(())
    }

    /// Inclusive page bounds of the window around `anchor`, clamped to the book.
    pub fn window_bounds(
        &self,
        anchor: PageIndex,
        dir: Direction,
        page_count: usize,
    ) -> Option<(PageIndex, PageIndex)> {
        let last = page_count.checked_sub(1)?;
        let (before, after) = match dir {
            Direction::Forward | Direction::None => (self.behind, self.ahead),
            Direction::Back => (self.ahead, self.behind),
        };
        let lo = anchor.0.saturating_sub(before).min(last);
        let hi = anchor.0.saturating_add(after).min(last);
        Some((PageIndex(lo), PageIndex(hi)))
    }

    /// Stagger delay for a page `distance` pages from the anchor.
    pub fn delay_for(&self, distance: usize) -> u64 {
        let extra = distance.saturating_sub(IMMEDIATE_NEIGHBOR_PAGES) as u64;
        extra.saturating_mul(self.stagger_ms)
    }

    /// Work out which pages to load and which to evict after navigating to `anchor`.
    #[tracing::instrument(level = "debug", skip(self, loaded))]
    pub fn plan_window(
        &self,
        anchor: PageIndex,
        dir: Direction,
        page_count: usize,
        loaded: &LoadedSet,
    ) -> WindowPlan {
        let Some((lo, hi)) = self.window_bounds(anchor, dir, page_count) else {
            return WindowPlan::default();
        };

        let biased_forward = dir != Direction::Back;
        let mut wanted: Vec<PageIndex> = (lo.0..=hi.0)
            .map(PageIndex)
            .filter(|p| !loaded.is_known(*p))
            .collect();
        wanted.sort_by_key(|p| {
            let on_biased_side = (p.0 >= anchor.0) == biased_forward;
            (page_distance(*p, anchor), !on_biased_side, p.0)
        });

        let to_load = wanted
            .into_iter()
            .map(|page| LoadRequest {
                page,
                delay_ms: self.delay_for(page_distance(page, anchor)),
            })
            .collect();

        let to_evict = loaded
            .resident()
            .filter(|p| page_distance(*p, anchor) > self.evict_distance)
            .collect();

        let plan = WindowPlan { to_load, to_evict };
        tracing::debug!(
            load = plan.to_load.len(),
            evict = plan.to_evict.len(),
            "preload window planned"
        );
        plan
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preload/window.rs"]
mod tests;
