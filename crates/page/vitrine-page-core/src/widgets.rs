//! State for the stateless-looking page widgets: loading overlay, mobile
//! nav, theme, toasts, lightbox, portfolio filter, testimonial slider.
//!
//! These carry no timing logic of their own beyond their fields; the engine
//! steps them and emits the resulting changes/events.

use serde::{Deserialize, Serialize};

use crate::ids::ToastId;

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// One-shot loading overlay; dismissed a fixed delay after engine start.
#[derive(Clone, Debug)]
pub struct Loader {
    pub key: String,
    pub dismissed: bool,
}

/// Mobile navigation drawer. Starts closed; the source page forces the
/// closed state on load.
#[derive(Clone, Debug)]
pub struct Nav {
    pub key: String,
    pub open: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToastPhase {
    Showing { since_ms: f64 },
    Leaving { since_ms: f64 },
}

/// A live toast. Removed from the engine once closed.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: ToastId,
    pub key: String,
    pub phase: ToastPhase,
}

#[derive(Clone, Debug)]
pub struct Lightbox {
    pub frame_key: String,
    pub image_key: String,
    pub open: bool,
    pub source: String,
}

#[derive(Clone, Debug)]
pub struct FilterItem {
    pub key: String,
    pub categories: Vec<String>,
}

impl FilterItem {
    /// "all" matches everything; otherwise the item must carry the category.
    pub fn matches(&self, category: &str) -> bool {
        category == "all" || self.categories.iter().any(|c| c == category)
    }
}

/// Testimonial slider: ordered slide keys plus the active index and the
/// auto-advance clock.
#[derive(Clone, Debug, Default)]
pub struct Slider {
    pub slides: Vec<String>,
    pub active: usize,
    pub last_advance_ms: f64,
}
