//! Core configuration for vitrine-page-core.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Timing and geometry constants for every controller behavior.
/// Defaults reproduce the page the engine was extracted from; hosts may
/// override individual fields without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Lookahead in pixels for the reveal pass: an element counts as in view
    /// once its top is within `viewport_height - reveal_offset_px`.
    pub reveal_offset_px: f32,
    /// Lookahead for counter activation; 0 means the element's top must be
    /// fully inside the viewport.
    pub counter_offset_px: f32,
    /// Duration of one counter animation from 0 to its target.
    pub counter_duration_ms: f64,
    /// Scroll offset above which the sticky header shrinks.
    pub header_threshold_px: f32,
    /// Delay before the loading overlay is dismissed after engine start.
    pub loader_delay_ms: f64,
    /// How long a toast stays fully visible before its exit begins.
    pub toast_duration_ms: f64,
    /// Length of a toast's exit transition.
    pub toast_exit_ms: f64,
    /// Auto-advance interval for the testimonial slider.
    pub slide_interval_ms: f64,
    /// Duration of a smooth-scroll tween to an anchor.
    pub scroll_duration_ms: f64,
    /// Shaping applied to the smooth-scroll tween. Counters stay linear.
    pub scroll_easing: Easing,
    /// Fixed offset subtracted from an anchor's document-space top, e.g. to
    /// compensate for a fixed header.
    pub anchor_offset_px: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_offset_px: 80.0,
            counter_offset_px: 0.0,
            counter_duration_ms: 1200.0,
            header_threshold_px: 80.0,
            loader_delay_ms: 500.0,
            toast_duration_ms: 5000.0,
            toast_exit_ms: 300.0,
            slide_interval_ms: 6000.0,
            scroll_duration_ms: 600.0,
            scroll_easing: Easing::CubicOut,
            anchor_offset_px: 0.0,
        }
    }
}
