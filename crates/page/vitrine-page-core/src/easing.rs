//! Easing functions for the smooth-scroll tween.
//!
//! Each variant maps [0,1] -> [0,1], is monotone, and is exact at both
//! boundaries. Counters never pass through here; their interpolation is
//! strictly linear.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Easing {
    /// No intermediate motion: holds the start value, snaps at completion.
    None,
    Linear,
    /// Ease-out cubic, `1 - (1 - t)^3`. Fast start, gentle settle.
    CubicOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::None => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Easing::Linear => t,
            Easing::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}
