//! Entrance-reveal elements.

use crate::viewport::ElementRect;

/// One element marked for an entrance transition. `revealed` is set once and
/// never cleared: `hidden -> revealed` is a monotonic, terminal transition.
#[derive(Clone, Debug)]
pub struct RevealElement {
    pub key: String,
    /// The transition variant named by page markup (e.g. "fade-up").
    pub group: String,
    pub rect: ElementRect,
    pub revealed: bool,
}

impl RevealElement {
    pub fn new(key: impl Into<String>, group: impl Into<String>, rect: ElementRect) -> Self {
        Self {
            key: key.into(),
            group: group.into(),
            rect,
            revealed: false,
        }
    }
}
