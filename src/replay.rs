//! Deterministic replay of scripted input against a simulated clock.
//!
//! A script lists page sources and timestamped inputs. The replayer drives a
//! [`FlipController`] through them, completes staggered page loads through a [`PageProbe`],
//! and fires timers exactly when they fall due. The resulting event log is stable across
//! runs, which makes it useful both for debugging timing tweaks and for tests.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::book::Book;
use crate::book::page::Page;
use crate::config::FlipbookConfig;
use crate::flip::controller::{FlipController, TransitionState};
use crate::flip::observer::{FlipEvent, FlipObserver};
use crate::foundation::core::{Direction, PageIndex, SpreadIndex};
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::input::InputEvent;
use crate::preload::loaded::LoadOutcome;

/// One scripted input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptStep {
    /// Clock value the input arrives at.
    pub at_ms: u64,
    /// The input itself.
    pub input: InputEvent,
}

/// A replay script.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// Page sources in book order.
    pub pages: Vec<String>,
    /// Optional controller config; defaults apply when absent.
    #[serde(default)]
    pub config: Option<FlipbookConfig>,
    /// Inputs, in any order; they are replayed by `at_ms`.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlipbookResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlipbookError::validation(format!("parse replay script JSON: {e}")))
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlipbookResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlipbookError::validation(format!("open replay script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Resolves a page load to an outcome.
pub trait PageProbe {
    /// Attempt to load `page`.
    fn probe(&mut self, page: &Page) -> LoadOutcome;
}

/// Probe under which every load succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysLoaded;

impl PageProbe for AlwaysLoaded {
    fn probe(&mut self, _page: &Page) -> LoadOutcome {
        LoadOutcome::Loaded
    }
}

/// Probe that decodes image headers from files under a root directory.
#[derive(Clone, Debug)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    /// Resolve page sources relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Like [`FsProbe::new`], but fails when `root` is not a readable directory.
    pub fn open(root: impl Into<PathBuf>) -> FlipbookResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(FlipbookError::asset(format!(
                "pages directory '{}' not found",
                root.display()
            )));
        }
        Ok(Self { root })
    }
}

impl PageProbe for FsProbe {
    fn probe(&mut self, page: &Page) -> LoadOutcome {
        let path = self.root.join(&page.source);
        match image::image_dimensions(&path) {
            Ok((w, h)) => {
                tracing::trace!(page = page.index.0, w, h, "page image probed");
                LoadOutcome::Loaded
            }
            Err(e) => {
                tracing::warn!(
                    page = page.index.0,
                    path = %path.display(),
                    "image probe failed: {e}"
                );
                LoadOutcome::Failed
            }
        }
    }
}

/// Event stamped with the simulated clock.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    /// Clock value when the event fired.
    pub at_ms: u64,
    /// The event.
    #[serde(flatten)]
    pub event: FlipEvent,
}

/// Outcome of a replay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReplayReport {
    /// Every observer callback, in firing order.
    pub events: Vec<TimedEvent>,
    /// Spread current when the replay ended.
    pub final_spread: SpreadIndex,
    /// Transition state when the replay ended.
    pub final_state: TransitionState,
    /// Clock value of the last processed event.
    pub ended_at_ms: u64,
}

impl ReplayReport {
    /// Number of committed page changes.
    pub fn page_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.event, FlipEvent::PageChange { .. }))
            .count()
    }
}

#[derive(Default)]
struct ReplayObserver {
    now_ms: u64,
    events: Vec<TimedEvent>,
    queued_loads: Vec<(PageIndex, u64)>,
}

impl ReplayObserver {
    fn push(&mut self, event: FlipEvent) {
        self.events.push(TimedEvent {
            at_ms: self.now_ms,
            event,
        });
    }
}

impl FlipObserver for ReplayObserver {
    fn on_page_change(&mut self, page: PageIndex) {
        self.push(FlipEvent::PageChange { page });
    }

    fn on_transition_start(&mut self, from: SpreadIndex, to: SpreadIndex, dir: Direction) {
        self.push(FlipEvent::TransitionStart {
            from,
            to,
            direction: dir,
        });
    }

    fn on_face_swap(&mut self, to: SpreadIndex) {
        self.push(FlipEvent::FaceSwap { to });
    }

    fn on_transition_end(&mut self, current: SpreadIndex) {
        self.push(FlipEvent::TransitionEnd { current });
    }

    fn load_page(&mut self, page: &Page, delay_ms: u64) {
        self.queued_loads.push((page.index, delay_ms));
        self.push(FlipEvent::Load {
            page: page.index,
            delay_ms,
        });
    }

    fn unload_page(&mut self, page: &Page) {
        self.push(FlipEvent::Unload { page: page.index });
    }
}

/// Replay `script` with `config` (falling back to the script's own config, then defaults).
///
/// At equal timestamps, due timers fire first, then load completions, then inputs.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(pages = script.pages.len(), steps = script.steps.len())
)]
pub fn replay(
    script: &Script,
    config: Option<FlipbookConfig>,
    probe: &mut dyn PageProbe,
) -> FlipbookResult<ReplayReport> {
    let config = config.or(script.config).unwrap_or_default();
    let book = Book::from_sources(script.pages.iter().cloned());
    let mut ctrl = FlipController::new(book, config, ReplayObserver::default())?;

    let mut steps: Vec<&ScriptStep> = script.steps.iter().collect();
    steps.sort_by_key(|s| s.at_ms);
    let mut steps = steps.into_iter().peekable();

    let mut loads: BinaryHeap<Reverse<(u64, u64, PageIndex)>> = BinaryHeap::new();
    let mut load_seq = 0u64;
    let mut now_ms = 0u64;
    enqueue_loads(&mut ctrl, now_ms, &mut loads, &mut load_seq);

    loop {
        let next = [
            ctrl.next_deadline(),
            loads.peek().map(|Reverse((due, _, _))| *due),
            steps.peek().map(|s| s.at_ms),
        ]
        .into_iter()
        .flatten()
        .min();
        let Some(t) = next else {
            break;
        };
        now_ms = t.max(now_ms);
        ctrl.observer_mut().now_ms = now_ms;

        ctrl.advance(now_ms);

        while let Some(Reverse((due, _, page))) = loads.peek().copied() {
            if due > now_ms {
                break;
            }
            loads.pop();
            let outcome = match ctrl.book().page(page) {
                Some(p) => probe.probe(p),
                None => continue,
            };
            ctrl.page_loaded(page, outcome, now_ms);
            enqueue_loads(&mut ctrl, now_ms, &mut loads, &mut load_seq);
        }

        while let Some(step) = steps.next_if(|s| s.at_ms <= now_ms) {
            ctrl.dispatch(step.input, now_ms);
            enqueue_loads(&mut ctrl, now_ms, &mut loads, &mut load_seq);
        }
    }

    let final_spread = ctrl.current_spread();
    let final_state = ctrl.state();
    let observer = ctrl.into_observer();
    tracing::debug!(events = observer.events.len(), ended_at_ms = now_ms, "replay finished");
    Ok(ReplayReport {
        events: observer.events,
        final_spread,
        final_state,
        ended_at_ms: now_ms,
    })
}

fn enqueue_loads(
    ctrl: &mut FlipController<ReplayObserver>,
    now_ms: u64,
    loads: &mut BinaryHeap<Reverse<(u64, u64, PageIndex)>>,
    seq: &mut u64,
) {
    for (page, delay_ms) in ctrl.observer_mut().queued_loads.drain(..) {
        loads.push(Reverse((now_ms.saturating_add(delay_ms), *seq, page)));
        *seq += 1;
    }
}

#[cfg(test)]
#[path = "../tests/unit/replay/replay.rs"]
mod tests;
