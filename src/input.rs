//! Input adapters funnelled into one navigation intent type.
//!
//! Keyboard, touch, and click handlers never touch controller state directly. They build an
//! [`InputEvent`] and hand it to [`crate::FlipController::dispatch`].

use kurbo::{Point, Rect};

use crate::foundation::core::SpreadIndex;

/// Minimum horizontal travel (px) for a touch gesture to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f64 = 50.0;
/// Fraction of the viewport width on each side that acts as a prev/next click zone.
pub const CLICK_ZONE_FRACTION: f64 = 0.35;

/// Keys the flipbook reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Previous spread.
    ArrowLeft,
    /// Next spread.
    ArrowRight,
    /// Previous spread.
    PageUp,
    /// Next spread.
    PageDown,
    /// First spread (front cover).
    Home,
    /// Last spread (back cover).
    End,
    /// Anything else; ignored.
    Other,
}

/// Raw input from any adapter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// Programmatic "next" (e.g. an on-screen arrow button).
    Next,
    /// Programmatic "previous".
    Prev,
    /// Jump straight to a spread (e.g. a thumbnail strip).
    GoTo(SpreadIndex),
    /// Key press.
    Key(Key),
    /// Completed touch gesture.
    Swipe {
        /// Touch start position.
        from: Point,
        /// Touch end position.
        to: Point,
    },
    /// Pointer click on the book.
    Click {
        /// Click position.
        at: Point,
        /// Book viewport in the same coordinate space.
        viewport: Rect,
    },
}

/// What an input asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// Turn one spread forward.
    Next,
    /// Turn one spread back.
    Prev,
    /// Turn directly to a spread.
    GoTo(SpreadIndex),
}

impl InputEvent {
    /// Resolve this input to a navigation intent, or `None` when it should be ignored.
    pub fn intent(&self, spread_count: usize) -> Option<NavIntent> {
        match *self {
            Self::Next => Some(NavIntent::Next),
            Self::Prev => Some(NavIntent::Prev),
            Self::GoTo(idx) => Some(NavIntent::GoTo(idx)),
            Self::Key(key) => key_intent(key, spread_count),
            Self::Swipe { from, to } => swipe_intent(from, to),
            Self::Click { at, viewport } => click_intent(at, viewport),
        }
    }
}

fn key_intent(key: Key, spread_count: usize) -> Option<NavIntent> {
    match key {
        Key::ArrowRight | Key::PageDown => Some(NavIntent::Next),
        Key::ArrowLeft | Key::PageUp => Some(NavIntent::Prev),
        Key::Home => Some(NavIntent::GoTo(SpreadIndex(0))),
        Key::End => spread_count
            .checked_sub(1)
            .map(|last| NavIntent::GoTo(SpreadIndex(last))),
        Key::Other => None,
    }
}

fn swipe_intent(from: Point, to: Point) -> Option<NavIntent> {
    let delta = to - from;
    if delta.x.abs() < SWIPE_MIN_DISTANCE || delta.y.abs() > delta.x.abs() {
        return None;
    }
    // Dragging the page leftwards turns it forward.
    if delta.x < 0.0 {
        Some(NavIntent::Next)
    } else {
        Some(NavIntent::Prev)
    }
}

fn click_intent(at: Point, viewport: Rect) -> Option<NavIntent> {
    let viewport = viewport.abs();
    if viewport.width() <= 0.0 || !viewport.contains(at) {
        return None;
    }
    let rel = (at.x - viewport.x0) / viewport.width();
    if rel < CLICK_ZONE_FRACTION {
        Some(NavIntent::Prev)
    } else if rel > 1.0 - CLICK_ZONE_FRACTION {
        Some(NavIntent::Next)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/input/input.rs"]
mod tests;
