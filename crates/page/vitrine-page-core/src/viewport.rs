//! Viewport geometry and the pure in-view test.

use serde::{Deserialize, Serialize};

/// Host-reported view metrics. `scroll_top` is the document-space offset of
/// the viewport's top edge; `window_inner_height` may be unavailable in some
/// embeddings, in which case the document's client height is the fallback.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub scroll_top: f32,
    #[serde(default)]
    pub window_inner_height: Option<f32>,
    pub client_height: f32,
    /// Full document height, when the host knows it. Bounds smooth-scroll
    /// targets; `None` leaves them unbounded above.
    #[serde(default)]
    pub document_height: Option<f32>,
}

impl Viewport {
    /// Visible height, falling back to the client height when the window
    /// inner height cannot be determined.
    #[inline]
    pub fn height(&self) -> f32 {
        self.window_inner_height.unwrap_or(self.client_height)
    }

    /// Largest reachable scroll offset, unbounded when the document height
    /// is unknown.
    #[inline]
    pub fn max_scroll(&self) -> f32 {
        match self.document_height {
            Some(doc) => (doc - self.height()).max(0.0),
            None => f32::MAX,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_top: 0.0,
            window_inner_height: None,
            client_height: 0.0,
            document_height: None,
        }
    }
}

/// Document-space rectangle of one registered element.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ElementRect {
    pub top: f32,
    #[serde(default)]
    pub height: f32,
}

/// Whether `rect` has crossed into the visible viewport.
///
/// `top` is the element's distance from the viewport's top edge; the element
/// is in view once `top <= viewport_height - offset`. Pure, O(1), no side
/// effects; safe to call for every candidate on every scroll tick. An offset
/// of 0 requires the element's top to be fully inside the viewport.
#[inline]
pub fn in_viewport(rect: &ElementRect, viewport: &Viewport, offset: f32) -> bool {
    let top = rect.top - viewport.scroll_top;
    top <= viewport.height() - offset
}
