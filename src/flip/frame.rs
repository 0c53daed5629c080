use crate::flip::timing::FlipTiming;
use crate::foundation::core::{Direction, SpreadIndex};

/// Which face of the turning leaf is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// The face belonging to the spread being left.
    Front,
    /// The face belonging to the spread being turned to.
    Back,
}

/// Everything a renderer needs to draw one frame of the book.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlipFrame {
    /// Spread drawn underneath the turning leaf.
    pub spread: SpreadIndex,
    /// Target spread while a flip is in flight.
    pub turning_to: Option<SpreadIndex>,
    /// Turn direction, `None` when idle.
    pub direction: Direction,
    /// Linear progress in `[0, 1]`.
    pub progress: f64,
    /// Leaf rotation around the spine in degrees; negative turns right-to-left.
    pub rotation_deg: f64,
    /// Visible leaf face.
    pub face: Face,
}

impl FlipFrame {
    /// Resting frame showing `spread`.
    pub fn idle(spread: SpreadIndex) -> Self {
        Self {
            spread,
            turning_to: None,
            direction: Direction::None,
            progress: 0.0,
            rotation_deg: 0.0,
            face: Face::Front,
        }
    }

    pub(crate) fn in_flight(
        timing: &FlipTiming,
        from: SpreadIndex,
        to: SpreadIndex,
        direction: Direction,
        started_at_ms: u64,
        face_swapped: bool,
        now_ms: u64,
    ) -> Self {
        let elapsed = now_ms.saturating_sub(started_at_ms);
        let progress = (elapsed as f64 / timing.duration_ms.max(1) as f64).clamp(0.0, 1.0);
        let target_deg = match direction {
            Direction::Back => 180.0,
            Direction::Forward | Direction::None => -180.0,
        };
        Self {
            spread: if face_swapped { to } else { from },
            turning_to: Some(to),
            direction,
            progress,
            rotation_deg: timing.ease.between(0.0, target_deg, progress),
            face: if face_swapped { Face::Back } else { Face::Front },
        }
    }
}
