use crate::book::page::Page;
use crate::foundation::core::{Direction, PageIndex, SpreadIndex};

/// Host-side callbacks fired by [`crate::FlipController`].
///
/// Every method defaults to a no-op so hosts only implement what they render.
pub trait FlipObserver {
    /// A transition committed; `page` is the new current page (`spread * 2`).
    fn on_page_change(&mut self, page: PageIndex) {
        let _ = page;
    }

    /// A transition started. Hosts typically disable navigation controls here.
    fn on_transition_start(&mut self, from: SpreadIndex, to: SpreadIndex, dir: Direction) {
        let _ = (from, to, dir);
    }

    /// The turning leaf now shows its back face.
    fn on_face_swap(&mut self, to: SpreadIndex) {
        let _ = to;
    }

    /// The transition finished and the controller is idle again.
    fn on_transition_end(&mut self, current: SpreadIndex) {
        let _ = current;
    }

    /// Start loading a page image after `delay_ms`. Report completion through
    /// [`crate::FlipController::page_loaded`].
    fn load_page(&mut self, page: &Page, delay_ms: u64) {
        let _ = (page, delay_ms);
    }

    /// Release a page image.
    fn unload_page(&mut self, page: &Page) {
        let _ = page;
    }
}

/// Observable controller event, as recorded by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FlipEvent {
    /// See [`FlipObserver::on_page_change`].
    PageChange {
        /// New current page.
        page: PageIndex,
    },
    /// See [`FlipObserver::on_transition_start`].
    TransitionStart {
        /// Spread being left.
        from: SpreadIndex,
        /// Spread being turned to.
        to: SpreadIndex,
        /// Turn direction.
        direction: Direction,
    },
    /// See [`FlipObserver::on_face_swap`].
    FaceSwap {
        /// Target spread.
        to: SpreadIndex,
    },
    /// See [`FlipObserver::on_transition_end`].
    TransitionEnd {
        /// New current spread.
        current: SpreadIndex,
    },
    /// See [`FlipObserver::load_page`].
    Load {
        /// Page to load.
        page: PageIndex,
        /// Stagger delay.
        delay_ms: u64,
    },
    /// See [`FlipObserver::unload_page`].
    Unload {
        /// Page to release.
        page: PageIndex,
    },
}

/// Observer that records every callback in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// Recorded events, oldest first.
    pub events: Vec<FlipEvent>,
}

impl RecordingObserver {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take and clear the recorded events.
    pub fn drain(&mut self) -> Vec<FlipEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of `PageChange` events recorded.
    pub fn page_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, FlipEvent::PageChange { .. }))
            .count()
    }

    /// Pages requested for loading, in request order.
    pub fn requested_loads(&self) -> Vec<PageIndex> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FlipEvent::Load { page, .. } => Some(*page),
                _ => None,
            })
            .collect()
    }

    /// Events other than load/unload bookkeeping.
    pub fn transitions(&self) -> Vec<FlipEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, FlipEvent::Load { .. } | FlipEvent::Unload { .. }))
            .cloned()
            .collect()
    }
}

impl FlipObserver for RecordingObserver {
    fn on_page_change(&mut self, page: PageIndex) {
        self.events.push(FlipEvent::PageChange { page });
    }

    fn on_transition_start(&mut self, from: SpreadIndex, to: SpreadIndex, dir: Direction) {
        self.events.push(FlipEvent::TransitionStart {
            from,
            to,
            direction: dir,
        });
    }

    fn on_face_swap(&mut self, to: SpreadIndex) {
        self.events.push(FlipEvent::FaceSwap { to });
    }

    fn on_transition_end(&mut self, current: SpreadIndex) {
        self.events.push(FlipEvent::TransitionEnd { current });
    }

    fn load_page(&mut self, page: &Page, delay_ms: u64) {
        self.events.push(FlipEvent::Load {
            page: page.index,
            delay_ms,
        });
    }

    fn unload_page(&mut self, page: &Page) {
        self.events.push(FlipEvent::Unload { page: page.index });
    }
}

impl<O: FlipObserver + ?Sized> FlipObserver for &mut O {
    fn on_page_change(&mut self, page: PageIndex) {
        (**self).on_page_change(page);
    }

    fn on_transition_start(&mut self, from: SpreadIndex, to: SpreadIndex, dir: Direction) {
        (**self).on_transition_start(from, to, dir);
    }

    fn on_face_swap(&mut self, to: SpreadIndex) {
        (**self).on_face_swap(to);
    }

    fn on_transition_end(&mut self, current: SpreadIndex) {
        (**self).on_transition_end(current);
    }

    fn load_page(&mut self, page: &Page, delay_ms: u64) {
        (**self).load_page(page, delay_ms);
    }

    fn unload_page(&mut self, page: &Page) {
        (**self).unload_page(page);
    }
}
