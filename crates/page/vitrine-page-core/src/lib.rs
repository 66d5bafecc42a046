//! Vitrine Page Core (engine-agnostic)
//!
//! A headless controller for the interactive polish of a static page: scroll
//! reveals, progressive counters, sticky header, navigation/theme toggles,
//! toasts, lightbox, portfolio filter, testimonial slider, and smooth-scroll
//! anchors. The host owns the real widget tree and rendering; this crate owns
//! all state and timing. Hosts feed ordered [`inputs::Command`]s plus a time
//! delta into [`engine::Engine::update`] and apply the emitted keyed changes
//! and semantic events to their presentation layer.

pub mod config;
pub mod counter;
pub mod easing;
pub mod engine;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod manifest;
pub mod outputs;
pub mod reveal;
pub mod tween;
pub mod value;
pub mod viewport;
pub mod widgets;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Result};
pub use ids::ToastId;
pub use inputs::{Command, Inputs};
pub use manifest::{parse_page_manifest_json, PageManifest};
pub use outputs::{Change, Outputs, UiEvent, SCROLL_LOCK_KEY, SCROLL_TOP_KEY, THEME_KEY};
pub use value::Value;
pub use viewport::{in_viewport, ElementRect, Viewport};
pub use widgets::Theme;
