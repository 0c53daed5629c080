use crate::book::Book;
use crate::config::FlipbookConfig;
use crate::flip::frame::FlipFrame;
use crate::flip::observer::FlipObserver;
use crate::flip::scheduler::{TimerId, TimerKind, TimerScheduler};
use crate::foundation::core::{Direction, PageIndex, SpreadIndex};
use crate::foundation::error::FlipbookResult;
use crate::input::{InputEvent, NavIntent};
use crate::preload::loaded::{LoadOutcome, LoadedSet};

/// Coarse controller phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No transition in flight; navigation is accepted.
    Idle,
    /// A transition is in flight; navigation is ignored.
    Flipping,
}

/// Snapshot of the transition state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionState {
    /// Current phase.
    pub phase: Phase,
    /// Direction of the in-flight turn, `None` when idle.
    pub direction: Direction,
    /// Spread the host should draw beneath the turning leaf.
    pub display_spread: SpreadIndex,
    /// Whether the midpoint face swap has happened.
    pub face_swapped: bool,
}

#[derive(Clone, Copy, Debug)]
struct Flight {
    from: SpreadIndex,
    to: SpreadIndex,
    direction: Direction,
    started_at_ms: u64,
    face_swapped: bool,
    swap_timer: TimerId,
    complete_timer: TimerId,
}

/// Page-turn controller for one book.
///
/// Single-threaded and clock-agnostic: the host passes its current time (ms) into every
/// call that can start a transition, and calls [`FlipController::advance`] from its frame or
/// timer loop so scheduled events fire. At most one transition is ever in flight.
pub struct FlipController<O: FlipObserver> {
    book: Book,
    config: FlipbookConfig,
    observer: O,
    timers: TimerScheduler,
    loaded: LoadedSet,
    current: SpreadIndex,
    last_direction: Direction,
    flight: Option<Flight>,
    pending: Option<SpreadIndex>,
    disposed: bool,
}

impl<O: FlipObserver> std::fmt::Debug for FlipController<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipController")
            .field("spreads", &self.book.spread_count())
            .field("current", &self.current)
            .field("flight", &self.flight)
            .field("pending", &self.pending)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl<O: FlipObserver> FlipController<O> {
    /// Build a controller resting on the front cover and request the initial preload window.
    pub fn new(book: Book, config: FlipbookConfig, observer: O) -> FlipbookResult<Self> {
        config.validate()?;
        let mut ctrl = Self {
            book,
            config,
            observer,
            timers: TimerScheduler::new(),
            loaded: LoadedSet::new(),
            current: SpreadIndex(0),
            last_direction: Direction::None,
            flight: None,
            pending: None,
            disposed: false,
        };
        ctrl.refresh_window(SpreadIndex(0), Direction::None, None);
        tracing::debug!(
            pages = ctrl.book.page_count(),
            spreads = ctrl.book.spread_count(),
            "flip controller ready"
        );
        Ok(ctrl)
    }

    /// Turn one spread forward. No-op on the last spread or while flipping.
    pub fn next_spread(&mut self, now_ms: u64) {
        let Some(to) = self.current.0.checked_add(1) else {
            return;
        };
        self.request_flip(SpreadIndex(to), now_ms);
    }

    /// Turn one spread back. No-op on the front cover or while flipping.
    pub fn prev_spread(&mut self, now_ms: u64) {
        let Some(to) = self.current.0.checked_sub(1) else {
            tracing::trace!("prev ignored: already on front cover");
            return;
        };
        self.request_flip(SpreadIndex(to), now_ms);
    }

    /// Turn directly to `index`. No-op when out of range, already current, or flipping.
    pub fn go_to_spread(&mut self, index: SpreadIndex, now_ms: u64) {
        self.request_flip(index, now_ms);
    }

    /// Route any adapter input through the navigation entry points.
    pub fn dispatch(&mut self, event: InputEvent, now_ms: u64) {
        match event.intent(self.book.spread_count()) {
            Some(NavIntent::Next) => self.next_spread(now_ms),
            Some(NavIntent::Prev) => self.prev_spread(now_ms),
            Some(NavIntent::GoTo(idx)) => self.go_to_spread(idx, now_ms),
            None => tracing::trace!(?event, "input ignored"),
        }
    }

    /// Fire every timer due at `now_ms`, in order.
    pub fn advance(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        while let Some(fired) = self.timers.pop_due(now_ms) {
            match fired.kind {
                TimerKind::FaceSwap => self.on_face_swap_due(fired.id),
                TimerKind::Complete => self.on_complete_due(fired.id),
            }
        }
    }

    /// Host callback: a load requested through [`FlipObserver::load_page`] finished.
    ///
    /// Failed loads count as loaded and are never retried. If a deferred flip was waiting on
    /// this page and everything it needs is now resident, it starts at `now_ms`.
    pub fn page_loaded(&mut self, page: PageIndex, outcome: LoadOutcome, now_ms: u64) {
        if self.disposed {
            return;
        }
        if self.book.page(page).is_none() {
            tracing::trace!(page = page.0, "load completion for unknown page ignored");
            return;
        }
        self.loaded.complete(page, outcome);

        let Some(target) = self.pending else {
            return;
        };
        if self.flight.is_none() && self.missing_pages(target).is_empty() {
            tracing::debug!(to = target.0, "deferred flip unblocked");
            self.pending = None;
            self.begin_flip(target, now_ms);
        }
    }

    /// Cancel pending timers, drop all state, and stop firing callbacks.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.timers.cancel_all();
        self.flight = None;
        self.pending = None;
        self.loaded.clear();
        self.disposed = true;
        tracing::debug!("flip controller disposed");
    }

    /// `true` while a transition is in flight.
    pub fn is_flipping(&self) -> bool {
        self.flight.is_some()
    }

    /// `true` once [`FlipController::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Committed current spread.
    pub fn current_spread(&self) -> SpreadIndex {
        self.current
    }

    /// Direction of the most recent started transition.
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Target of a flip deferred on missing pages.
    pub fn pending_target(&self) -> Option<SpreadIndex> {
        self.pending
    }

    /// Transition state snapshot.
    pub fn state(&self) -> TransitionState {
        match self.flight {
            None => TransitionState {
                phase: Phase::Idle,
                direction: Direction::None,
                display_spread: self.current,
                face_swapped: false,
            },
            Some(f) => TransitionState {
                phase: Phase::Flipping,
                direction: f.direction,
                display_spread: if f.face_swapped { f.to } else { f.from },
                face_swapped: f.face_swapped,
            },
        }
    }

    /// Render sample at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> FlipFrame {
        match self.flight {
            None => FlipFrame::idle(self.current),
            Some(f) => FlipFrame::in_flight(
                &self.config.timing,
                f.from,
                f.to,
                f.direction,
                f.started_at_ms,
                f.face_swapped,
                now_ms,
            ),
        }
    }

    /// Earliest time [`FlipController::advance`] has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_due()
    }

    /// The book being shown.
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Active configuration.
    pub fn config(&self) -> &FlipbookConfig {
        &self.config
    }

    /// Resident page set.
    pub fn loaded(&self) -> &LoadedSet {
        &self.loaded
    }

    /// Borrow the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutably borrow the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the controller and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    fn request_flip(&mut self, to: SpreadIndex, now_ms: u64) {
        if self.disposed {
            return;
        }
        if self.flight.is_some() {
            tracing::trace!(to = to.0, "navigation ignored: flip in flight");
            return;
        }
        if to.0 >= self.book.spread_count() {
            tracing::trace!(to = to.0, "navigation ignored: out of range");
            return;
        }
        if to == self.current {
            tracing::trace!(to = to.0, "navigation ignored: already current");
            return;
        }

        let missing = self.missing_pages(to);
        if !missing.is_empty() {
            tracing::debug!(to = to.0, missing = missing.len(), "flip deferred: pages not loaded");
            self.pending = Some(to);
            for page in missing {
                self.request_load(page, 0);
            }
            let current = self.current;
            self.refresh_window(to, current.direction_to(to), Some(current));
            return;
        }

        self.pending = None;
        self.begin_flip(to, now_ms);
    }

    fn begin_flip(&mut self, to: SpreadIndex, now_ms: u64) {
        let from = self.current;
        let direction = from.direction_to(to);
        let timing = self.config.timing;
        let swap_timer = self
            .timers
            .schedule(now_ms.saturating_add(timing.face_swap_ms), TimerKind::FaceSwap);
        let complete_timer = self
            .timers
            .schedule(now_ms.saturating_add(timing.duration_ms), TimerKind::Complete);

        self.flight = Some(Flight {
            from,
            to,
            direction,
            started_at_ms: now_ms,
            face_swapped: false,
            swap_timer,
            complete_timer,
        });
        self.last_direction = direction;

        tracing::debug!(from = from.0, to = to.0, ?direction, "flip started");
        self.observer.on_transition_start(from, to, direction);
        self.refresh_window(to, direction, Some(from));
    }

    fn on_face_swap_due(&mut self, id: TimerId) {
        let Some(flight) = self.flight.as_mut().filter(|f| f.swap_timer == id) else {
            return;
        };
        flight.face_swapped = true;
        let to = flight.to;
        tracing::debug!(to = to.0, "face swapped");
        self.observer.on_face_swap(to);
    }

    fn on_complete_due(&mut self, id: TimerId) {
        let Some(flight) = self.flight.filter(|f| f.complete_timer == id) else {
            return;
        };
        self.flight = None;
        self.current = flight.to;
        let page = self.book.reported_page(flight.to);
        tracing::debug!(spread = flight.to.0, page = page.0, "flip committed");
        self.observer.on_page_change(page);
        self.observer.on_transition_end(flight.to);
        // The outgoing spread was pinned while it was on screen.
        self.refresh_window(flight.to, flight.direction, None);
    }

    fn missing_pages(&self, spread: SpreadIndex) -> Vec<PageIndex> {
        self.book
            .pages_of(spread)
            .into_iter()
            .filter(|p| !self.loaded.contains(*p))
            .collect()
    }

    fn request_load(&mut self, page: PageIndex, delay_ms: u64) {
        let Some(p) = self.book.page(page) else {
            return;
        };
        if self.loaded.request(page) {
            self.observer.load_page(p, delay_ms);
        }
    }

    /// Apply the preload plan around `anchor`. Pages of `shown` are never evicted.
    fn refresh_window(
        &mut self,
        anchor: SpreadIndex,
        direction: Direction,
        shown: Option<SpreadIndex>,
    ) {
        let Some(anchor_page) = self.book.first_page_of(anchor) else {
            return;
        };
        let pinned = shown.map(|s| self.book.pages_of(s)).unwrap_or_default();
        let plan = self.config.preload.plan_window(
            anchor_page,
            direction,
            self.book.page_count(),
            &self.loaded,
        );
        for req in plan.to_load {
            self.request_load(req.page, req.delay_ms);
        }
        for page in plan.to_evict {
            if pinned.contains(&page) {
                continue;
            }
            if self.loaded.evict(page)
                && let Some(p) = self.book.page(page)
            {
                self.observer.unload_page(p);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flip/controller.rs"]
mod tests;
