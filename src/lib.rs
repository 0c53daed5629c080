//! Flipbook is the page-turn controller behind an image book: it pairs a flat list of page
//! images into spreads, runs one timed two-phase flip at a time, and keeps a direction-biased
//! window of page images resident.
//!
//! The crate owns no rendering and no I/O. A host supplies:
//!
//! - a clock, passed as `now_ms` into navigation calls and [`FlipController::advance`]
//! - a [`FlipObserver`] that reacts to page changes, phase changes, and load/unload requests
//! - load completions, reported back through [`FlipController::page_loaded`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod book;
mod config;
mod flip;
mod foundation;
mod preload;

/// Input adapters and the navigation intent they resolve to.
pub mod input;
/// Scripted replay against a simulated clock.
pub mod replay;
/// Injectable per-visit viewer state.
pub mod session;

pub use crate::animation::ease::Ease;
pub use crate::book::Book;
pub use crate::book::page::{Page, pages_from_sources};
pub use crate::book::spread::{Spread, SpreadKind, build_spreads, spread_count_for};
pub use crate::config::FlipbookConfig;
pub use crate::flip::controller::{FlipController, Phase, TransitionState};
pub use crate::flip::frame::{Face, FlipFrame};
pub use crate::flip::observer::{FlipEvent, FlipObserver, RecordingObserver};
pub use crate::flip::scheduler::{FiredTimer, TimerId, TimerKind, TimerScheduler};
pub use crate::flip::timing::{
    DEFAULT_DURATION_MS, DEFAULT_FACE_SWAP_MS, EARLY_FACE_SWAP_MS, FlipTiming,
};
pub use crate::foundation::core::{Direction, PageIndex, SpreadIndex};
pub use crate::foundation::error::{FlipbookError, FlipbookResult};
pub use crate::input::{InputEvent, Key, NavIntent};
pub use crate::preload::loaded::{LoadOutcome, LoadedSet};
pub use crate::preload::window::{LoadRequest, PreloadPolicy, WindowPlan};
