//! Smooth-scroll tween state.

use crate::easing::Easing;

/// An in-flight scroll tween toward an anchor. At most one is active; a host
/// `Scroll` command cancels it (user input wins).
#[derive(Clone, Debug)]
pub struct ScrollTween {
    pub anchor: String,
    pub from: f32,
    pub to: f32,
    pub started_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl ScrollTween {
    /// Interpolated offset at `now`, and whether the tween has completed.
    /// On completion the offset is exactly the target.
    pub fn sample(&self, now_ms: f64) -> (f32, bool) {
        let duration = self.duration_ms.max(f64::EPSILON);
        let progress = ((now_ms - self.started_ms) / duration).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return (self.to, true);
        }
        let eased = self.easing.apply(progress as f32);
        (self.from + (self.to - self.from) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should land exactly on the target at completion
    #[test]
    fn exact_at_completion() {
        let tw = ScrollTween {
            anchor: "contact".into(),
            from: 0.0,
            to: 1234.5,
            started_ms: 100.0,
            duration_ms: 600.0,
            easing: Easing::CubicOut,
        };
        let (offset, done) = tw.sample(100.0 + 600.0);
        assert!(done);
        assert_eq!(offset, 1234.5);
        let (offset, done) = tw.sample(100.0 + 10_000.0);
        assert!(done);
        assert_eq!(offset, 1234.5);
    }

    /// it should move monotonically from the start toward the target
    #[test]
    fn monotone_progress() {
        let tw = ScrollTween {
            anchor: "about".into(),
            from: 200.0,
            to: 800.0,
            started_ms: 0.0,
            duration_ms: 600.0,
            easing: Easing::Linear,
        };
        let mut prev = tw.sample(0.0).0;
        for i in 1..=10 {
            let (offset, _) = tw.sample(i as f64 * 60.0);
            assert!(offset >= prev);
            prev = offset;
        }
    }
}
