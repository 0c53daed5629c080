/// Easing curve applied to leaf rotation while a flip is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant angular speed.
    Linear,
    /// Slow start, fast finish.
    InQuad,
    /// Fast start, slow finish.
    OutQuad,
    /// Cubic ease-out; the leaf settles gently onto the stack.
    OutCubic,
    /// Cubic ease-in/out.
    #[default]
    InOutCubic,
    /// Sinusoidal ease-in/out, the closest match to a CSS `ease-in-out` tween.
    InOutSine,
}

impl Ease {
    /// Map normalized progress `t` (clamped to `[0, 1]`) through this curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Interpolate between `from` and `to` at eased progress `t`.
    pub fn between(self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.apply(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
