//! Input contracts for the core engine.
//!
//! Hosts build one `Inputs` per tick from the events their environment
//! delivered (scroll, resize, clicks) and pass it into Engine::update().
//! Commands are applied strictly in delivery order; a `Scroll` command runs
//! the full scroll dispatch immediately so a batch containing several scroll
//! positions misses no tick.

use serde::{Deserialize, Serialize};

use crate::ids::ToastId;
use crate::widgets::Theme;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Inputs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(cmd: Command) -> Self {
        Self {
            commands: vec![cmd],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// The host scrolled (natively or by user input). Cancels any active
    /// smooth-scroll tween: user input wins.
    Scroll {
        top: f32,
    },
    /// View metrics changed.
    Resize {
        window_inner_height: Option<f32>,
        client_height: f32,
        document_height: Option<f32>,
    },
    ToggleNav,
    /// Sent when a nav link is activated; closing an already-closed nav is a
    /// no-op.
    CloseNav,
    ToggleTheme,
    SetTheme {
        theme: Theme,
    },
    DismissToast {
        id: ToastId,
    },
    OpenLightbox {
        source: String,
    },
    CloseLightbox,
    ApplyFilter {
        category: String,
    },
    NextSlide,
    PrevSlide,
    SelectSlide {
        index: usize,
    },
    ScrollToAnchor {
        name: String,
    },
}
