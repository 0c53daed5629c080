use crate::animation::ease::Ease;
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Total flip duration used by the portfolio site.
pub const DEFAULT_DURATION_MS: u64 = 900;
/// Face swap point used by most rendering backends.
pub const DEFAULT_FACE_SWAP_MS: u64 = 420;
/// Earlier face swap point some compositors need to avoid a one-frame flash of the old face.
pub const EARLY_FACE_SWAP_MS: u64 = 380;

/// Fixed timing of one page turn.
///
/// The face swap point is a rendering tunable, not a semantic difference: any value strictly
/// inside the animation is valid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlipTiming {
    /// Time from transition start to completion.
    pub duration_ms: u64,
    /// Time from transition start to the front/back face swap.
    pub face_swap_ms: u64,
    /// Curve applied to leaf rotation.
    pub ease: Ease,
}

impl Default for FlipTiming {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            face_swap_ms: DEFAULT_FACE_SWAP_MS,
            ease: Ease::default(),
        }
    }
}

impl FlipTiming {
    /// Same timing with a different face swap point.
    pub fn with_face_swap_ms(self, face_swap_ms: u64) -> Self {
        Self {
            face_swap_ms,
            ..self
        }
    }

    /// Face swap point as a fraction of the total duration.
    pub fn face_swap_fraction(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.face_swap_ms as f64 / self.duration_ms as f64
    }

    /// Check that the face swap lands strictly inside a non-empty animation.
    pub fn validate(&self) -> FlipbookResult<()> {
        if self.duration_ms == 0 {
            return Err(FlipbookError::config("flip duration_ms must be > 0"));
        }
        if self.face_swap_ms == 0 || self.face_swap_ms >= self.duration_ms {
            return Err(FlipbookError::config(format!(
                "face_swap_ms must be within (0, {}), got {}",
                self.duration_ms, self.face_swap_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flip/timing.rs"]
mod tests;
