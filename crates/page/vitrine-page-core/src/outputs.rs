//! Output contracts from the core engine.
//!
//! Outputs carry only the keyed value changes for this tick plus a separate
//! list of semantic events. Hosts apply changes to their widget tree (class
//! toggles, text content, scroll position) and route events to whatever
//! needs them (analytics, focus management, persistence of the theme flag).

use serde::{Deserialize, Serialize};

use crate::ids::ToastId;
use crate::value::Value;
use crate::widgets::Theme;

/// Key carrying the active theme name.
pub const THEME_KEY: &str = "document.theme";
/// Key carrying the OR of the nav and lightbox scroll locks.
pub const SCROLL_LOCK_KEY: &str = "body.scroll-lock";
/// Key carrying the interpolated offset of a smooth-scroll tween.
pub const SCROLL_TOP_KEY: &str = "window.scroll-top";

/// One changed value for a host-registered key this tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Change {
    pub key: String,
    pub value: Value,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum UiEvent {
    RevealEntered {
        key: String,
        group: String,
    },
    CounterStarted {
        key: String,
    },
    CounterFinished {
        key: String,
        target: u32,
    },
    HeaderToggled {
        shrunk: bool,
    },
    LoaderDismissed,
    NavToggled {
        open: bool,
    },
    ThemeChanged {
        theme: Theme,
    },
    ToastExpiring {
        id: ToastId,
    },
    ToastClosed {
        id: ToastId,
    },
    LightboxOpened {
        source: String,
    },
    LightboxClosed,
    FilterApplied {
        category: String,
        visible: usize,
    },
    SlideChanged {
        index: usize,
    },
    ScrollFinished {
        anchor: String,
    },
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<UiEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
