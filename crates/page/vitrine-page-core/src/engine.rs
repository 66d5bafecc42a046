//! Engine: data ownership and public API.
//!
//! Methods:
//! - new, register_* (or load_manifest), update (apply commands → advance
//!   clock → step timed work → scroll dispatch), needs_frame
//!
//! The engine is single-threaded and event-driven: hosts call `update` once
//! per animation frame (and may batch several commands into one call).
//! Commands are applied strictly in delivery order; every `Scroll` command
//! runs a full scroll dispatch immediately so no tick is missed, and one
//! more dispatch runs at the end of every update so elements already in view
//! on page load behave as if an initial scroll fired.

use hashbrown::HashMap;
use log::{debug, warn};

use crate::config::Config;
use crate::counter::{Counter, CounterPhase};
use crate::ids::{IdAllocator, ToastId};
use crate::inputs::{Command, Inputs};
use crate::manifest::PageManifest;
use crate::outputs::{Change, Outputs, UiEvent, SCROLL_LOCK_KEY, SCROLL_TOP_KEY, THEME_KEY};
use crate::reveal::RevealElement;
use crate::tween::ScrollTween;
use crate::value::Value;
use crate::viewport::{in_viewport, ElementRect, Viewport};
use crate::widgets::{FilterItem, Lightbox, Loader, Nav, Slider, Theme, Toast, ToastPhase};

/// Sticky page header; shrinks past a fixed scroll threshold.
#[derive(Clone, Debug)]
struct Header {
    key: String,
    shrunk: bool,
}

/// Engine (core) with host handle type fixed to String keys.
#[derive(Debug)]
pub struct Engine {
    // Owned data
    cfg: Config,
    ids: IdAllocator,
    clock_ms: f64,
    viewport: Viewport,

    reveals: Vec<RevealElement>,
    counters: Vec<Counter>,
    header: Option<Header>,
    loader: Option<Loader>,
    nav: Option<Nav>,
    theme: Theme,
    toasts: Vec<Toast>,
    lightbox: Option<Lightbox>,
    filter_items: Vec<FilterItem>,
    active_category: String,
    slider: Slider,
    anchors: HashMap<String, f32>,
    tween: Option<ScrollTween>,
    scroll_locked: bool,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            clock_ms: 0.0,
            viewport: Viewport::default(),
            reveals: Vec::new(),
            counters: Vec::new(),
            header: None,
            loader: None,
            nav: None,
            theme: Theme::default(),
            toasts: Vec::new(),
            lightbox: None,
            filter_items: Vec::new(),
            active_category: "all".to_string(),
            slider: Slider::default(),
            anchors: HashMap::new(),
            tween: None,
            scroll_locked: false,
            outputs: Outputs::default(),
        }
    }

    /// Set the host view metrics, typically once before the first update.
    /// Later changes arrive as `Command::Resize` / `Command::Scroll`.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn register_reveal(
        &mut self,
        key: impl Into<String>,
        group: impl Into<String>,
        rect: ElementRect,
    ) {
        self.reveals.push(RevealElement::new(key, group, rect));
    }

    pub fn register_counter(
        &mut self,
        key: impl Into<String>,
        rect: ElementRect,
        raw_target: &str,
    ) {
        self.counters.push(Counter::new(key, rect, raw_target));
    }

    pub fn register_header(&mut self, key: impl Into<String>) {
        self.header = Some(Header {
            key: key.into(),
            shrunk: false,
        });
    }

    pub fn register_loader(&mut self, key: impl Into<String>) {
        self.loader = Some(Loader {
            key: key.into(),
            dismissed: false,
        });
    }

    pub fn register_nav(&mut self, key: impl Into<String>) {
        self.nav = Some(Nav {
            key: key.into(),
            open: false,
        });
    }

    pub fn register_lightbox(
        &mut self,
        frame_key: impl Into<String>,
        image_key: impl Into<String>,
    ) {
        self.lightbox = Some(Lightbox {
            frame_key: frame_key.into(),
            image_key: image_key.into(),
            open: false,
            source: String::new(),
        });
    }

    /// Spawn a toast; it starts its visible phase on the engine clock now.
    pub fn register_toast(&mut self, key: impl Into<String>) -> ToastId {
        let id = self.ids.alloc_toast();
        self.toasts.push(Toast {
            id,
            key: key.into(),
            phase: ToastPhase::Showing {
                since_ms: self.clock_ms,
            },
        });
        id
    }

    pub fn register_filter_item(&mut self, key: impl Into<String>, categories: Vec<String>) {
        self.filter_items.push(FilterItem {
            key: key.into(),
            categories,
        });
    }

    /// Slides register in display order; the first registered slide is active.
    pub fn register_slide(&mut self, key: impl Into<String>) {
        self.slider.slides.push(key.into());
        self.slider.last_advance_ms = self.clock_ms;
    }

    pub fn register_anchor(&mut self, name: impl Into<String>, top: f32) {
        self.anchors.insert(name.into(), top);
    }

    /// Register everything a parsed manifest describes, in one call.
    /// Returns the ids of the manifest's toasts, in manifest order.
    pub fn load_manifest(&mut self, manifest: PageManifest) -> Vec<ToastId> {
        for r in manifest.reveals {
            self.register_reveal(r.key, r.group, r.rect);
        }
        for c in manifest.counters {
            self.register_counter(c.key, c.rect, &c.target);
        }
        if let Some(key) = manifest.header {
            self.register_header(key);
        }
        if let Some(key) = manifest.nav {
            self.register_nav(key);
        }
        if let Some(key) = manifest.loader {
            self.register_loader(key);
        }
        if let Some(lb) = manifest.lightbox {
            self.register_lightbox(lb.frame, lb.image);
        }
        let mut toast_ids = Vec::with_capacity(manifest.toasts.len());
        for key in manifest.toasts {
            toast_ids.push(self.register_toast(key));
        }
        for item in manifest.filter_items {
            self.register_filter_item(item.key, item.categories);
        }
        for key in manifest.slides {
            self.register_slide(key);
        }
        for a in manifest.anchors {
            self.register_anchor(a.name, a.top);
        }
        // Initial state, not a transition: no change is emitted. Hosts that
        // persist the preference replay it through `Command::SetTheme`.
        if let Some(theme) = manifest.theme {
            self.theme = theme;
        }
        toast_ids
    }

    /// Step the engine by `dt` seconds with the given inputs, producing the
    /// changes and events for this tick. Never fails; malformed input is
    /// coerced or dropped with a log line.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Apply host commands in delivery order.
        self.apply_inputs(inputs);

        // 2) Advance the engine clock.
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            debug!("non-finite or negative dt {dt}, treating as 0");
            0.0
        };
        self.clock_ms += f64::from(dt) * 1000.0;

        // 3) Step timed work for this frame.
        self.step_loader();
        self.step_tween();
        self.step_counters();
        self.step_toasts();
        self.step_slider();

        // 4) One dispatch per update, so elements in view without any scroll
        //    (page load, resize) still activate.
        self.dispatch_scroll();

        &self.outputs
    }

    /// Whether time-driven work is pending. Hosts can stop requesting
    /// animation frames while this is false; "pausing" is simply not
    /// rescheduling.
    pub fn needs_frame(&self) -> bool {
        self.loader.as_ref().map_or(false, |l| !l.dismissed)
            || self.tween.is_some()
            || !self.toasts.is_empty()
            || self.counters.iter().any(Counter::is_animating)
            || self.slider.slides.len() >= 2
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn scroll_top(&self) -> f32 {
        self.viewport.scroll_top
    }

    pub fn active_slide(&self) -> usize {
        self.slider.active
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Current displayed value of a counter, if one is registered under `key`.
    pub fn counter_value(&self, key: &str) -> Option<u32> {
        self.counters
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.last_value)
    }

    pub fn is_revealed(&self, key: &str) -> Option<bool> {
        self.reveals
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.revealed)
    }

    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.commands {
            match cmd {
                Command::Scroll { top } => self.apply_scroll(top),
                Command::Resize {
                    window_inner_height,
                    client_height,
                    document_height,
                } => {
                    if !client_height.is_finite() {
                        debug!("ignoring resize with non-finite client height");
                        continue;
                    }
                    self.viewport.window_inner_height =
                        window_inner_height.filter(|h| h.is_finite());
                    self.viewport.client_height = client_height;
                    self.viewport.document_height = document_height.filter(|h| h.is_finite());
                }
                Command::ToggleNav => {
                    let open = match self.nav.as_ref() {
                        Some(nav) => !nav.open,
                        None => continue,
                    };
                    self.set_nav_open(open);
                }
                Command::CloseNav => {
                    if self.nav.as_ref().map_or(false, |n| n.open) {
                        self.set_nav_open(false);
                    }
                }
                Command::ToggleTheme => self.set_theme(self.theme.toggled()),
                Command::SetTheme { theme } => self.set_theme(theme),
                Command::DismissToast { id } => self.dismiss_toast(id),
                Command::OpenLightbox { source } => self.open_lightbox(source),
                Command::CloseLightbox => self.close_lightbox(),
                Command::ApplyFilter { category } => self.apply_filter(category),
                Command::NextSlide => {
                    if !self.slider.slides.is_empty() {
                        let next = (self.slider.active + 1) % self.slider.slides.len();
                        self.slider.last_advance_ms = self.clock_ms;
                        self.set_active_slide(next);
                    }
                }
                Command::PrevSlide => {
                    if !self.slider.slides.is_empty() {
                        let len = self.slider.slides.len();
                        let prev = (self.slider.active + len - 1) % len;
                        self.slider.last_advance_ms = self.clock_ms;
                        self.set_active_slide(prev);
                    }
                }
                Command::SelectSlide { index } => {
                    if index >= self.slider.slides.len() {
                        warn!("ignoring SelectSlide with out-of-range index {index}");
                        continue;
                    }
                    self.slider.last_advance_ms = self.clock_ms;
                    self.set_active_slide(index);
                }
                Command::ScrollToAnchor { name } => self.scroll_to_anchor(name),
            }
        }
    }

    fn apply_scroll(&mut self, top: f32) {
        if !top.is_finite() {
            debug!("ignoring non-finite scroll offset {top}");
            return;
        }
        if self.tween.take().is_some() {
            debug!("host scroll cancels the active smooth-scroll tween");
        }
        self.viewport.scroll_top = top;
        self.dispatch_scroll();
    }

    /// One scroll dispatch: reveal pass, then counter activation, then the
    /// sticky header. The passes touch disjoint element sets; their order is
    /// still fixed so emitted change order is deterministic.
    fn dispatch_scroll(&mut self) {
        for el in &mut self.reveals {
            if el.revealed {
                continue;
            }
            if in_viewport(&el.rect, &self.viewport, self.cfg.reveal_offset_px) {
                el.revealed = true;
                self.outputs.push_change(Change {
                    key: el.key.clone(),
                    value: Value::Bool(true),
                });
                self.outputs.push_event(UiEvent::RevealEntered {
                    key: el.key.clone(),
                    group: el.group.clone(),
                });
            }
        }

        let now = self.clock_ms;
        for c in &mut self.counters {
            if !matches!(c.phase, CounterPhase::Idle) {
                continue;
            }
            if in_viewport(&c.rect, &self.viewport, self.cfg.counter_offset_px) {
                // Phase is written before any stepping can observe the
                // counter, so a scroll tick and a frame tick cannot start
                // the same element twice.
                self.outputs.push_event(UiEvent::CounterStarted {
                    key: c.key.clone(),
                });
                if c.target == 0 {
                    c.phase = CounterPhase::Done;
                    self.outputs.push_change(Change {
                        key: c.key.clone(),
                        value: Value::Float(0.0),
                    });
                    self.outputs.push_event(UiEvent::CounterFinished {
                        key: c.key.clone(),
                        target: 0,
                    });
                } else {
                    c.phase = CounterPhase::Animating { started_ms: now };
                }
            }
        }

        if let Some(h) = self.header.as_mut() {
            let shrunk = self.viewport.scroll_top > self.cfg.header_threshold_px;
            if shrunk != h.shrunk {
                h.shrunk = shrunk;
                self.outputs.push_change(Change {
                    key: h.key.clone(),
                    value: Value::Bool(shrunk),
                });
                self.outputs.push_event(UiEvent::HeaderToggled { shrunk });
            }
        }
    }

    fn step_loader(&mut self) {
        if let Some(loader) = self.loader.as_mut() {
            if !loader.dismissed && self.clock_ms >= self.cfg.loader_delay_ms {
                loader.dismissed = true;
                self.outputs.push_change(Change {
                    key: loader.key.clone(),
                    value: Value::Bool(false),
                });
                self.outputs.push_event(UiEvent::LoaderDismissed);
            }
        }
    }

    fn step_tween(&mut self) {
        let sampled = self.tween.as_ref().map(|tw| {
            let (offset, done) = tw.sample(self.clock_ms);
            (offset, done, tw.anchor.clone())
        });
        if let Some((offset, done, anchor)) = sampled {
            self.viewport.scroll_top = offset;
            self.outputs.push_change(Change {
                key: SCROLL_TOP_KEY.to_string(),
                value: Value::Float(offset),
            });
            // The tween fires the same dispatch native smooth scrolling
            // would: header, reveals, and counters all react mid-flight.
            self.dispatch_scroll();
            if done {
                self.tween = None;
                self.outputs.push_event(UiEvent::ScrollFinished { anchor });
            }
        }
    }

    fn step_counters(&mut self) {
        let now = self.clock_ms;
        let duration = self.cfg.counter_duration_ms.max(f64::EPSILON);
        for c in &mut self.counters {
            let started_ms = match c.phase {
                CounterPhase::Animating { started_ms } => started_ms,
                _ => continue,
            };
            let progress = ((now - started_ms) / duration).clamp(0.0, 1.0);
            if progress >= 1.0 {
                // Exact target, immune to floor truncation.
                c.last_value = c.target;
                c.phase = CounterPhase::Done;
                self.outputs.push_change(Change {
                    key: c.key.clone(),
                    value: Value::Float(c.target as f32),
                });
                self.outputs.push_event(UiEvent::CounterFinished {
                    key: c.key.clone(),
                    target: c.target,
                });
            } else {
                let raw = (progress * f64::from(c.target)).floor() as u32;
                let value = raw.max(c.last_value).min(c.target);
                c.last_value = value;
                self.outputs.push_change(Change {
                    key: c.key.clone(),
                    value: Value::Float(value as f32),
                });
            }
        }
    }

    fn step_toasts(&mut self) {
        let now = self.clock_ms;
        let show_ms = self.cfg.toast_duration_ms;
        let exit_ms = self.cfg.toast_exit_ms;
        let outputs = &mut self.outputs;
        self.toasts.retain_mut(|t| match t.phase {
            ToastPhase::Showing { since_ms } => {
                if now - since_ms >= show_ms {
                    t.phase = ToastPhase::Leaving { since_ms: now };
                    outputs.push_change(Change {
                        key: t.key.clone(),
                        value: Value::Bool(false),
                    });
                    outputs.push_event(UiEvent::ToastExpiring { id: t.id });
                }
                true
            }
            ToastPhase::Leaving { since_ms } => {
                if now - since_ms >= exit_ms {
                    outputs.push_event(UiEvent::ToastClosed { id: t.id });
                    false
                } else {
                    true
                }
            }
        });
    }

    fn step_slider(&mut self) {
        if self.slider.slides.len() < 2 {
            return;
        }
        if self.clock_ms - self.slider.last_advance_ms >= self.cfg.slide_interval_ms {
            let next = (self.slider.active + 1) % self.slider.slides.len();
            self.slider.last_advance_ms = self.clock_ms;
            self.set_active_slide(next);
        }
    }

    fn set_active_slide(&mut self, index: usize) {
        if index == self.slider.active {
            return;
        }
        self.slider.active = index;
        for (i, key) in self.slider.slides.iter().enumerate() {
            self.outputs.push_change(Change {
                key: key.clone(),
                value: Value::Bool(i == index),
            });
        }
        self.outputs.push_event(UiEvent::SlideChanged { index });
    }

    fn set_nav_open(&mut self, open: bool) {
        let mut changed = false;
        if let Some(nav) = self.nav.as_mut() {
            if nav.open != open {
                nav.open = open;
                changed = true;
                self.outputs.push_change(Change {
                    key: nav.key.clone(),
                    value: Value::Bool(open),
                });
                self.outputs.push_event(UiEvent::NavToggled { open });
            }
        }
        if changed {
            self.recompute_scroll_lock();
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.outputs.push_change(Change {
            key: THEME_KEY.to_string(),
            value: Value::Text(theme.name().to_string()),
        });
        self.outputs.push_event(UiEvent::ThemeChanged { theme });
    }

    fn dismiss_toast(&mut self, id: ToastId) {
        let Some(idx) = self.toasts.iter().position(|t| t.id == id) else {
            warn!("ignoring DismissToast for unknown or closed toast {id:?}");
            return;
        };
        let toast = self.toasts.remove(idx);
        // Dismissal skips the exit transition. A leaving toast already
        // emitted its hide change.
        if matches!(toast.phase, ToastPhase::Showing { .. }) {
            self.outputs.push_change(Change {
                key: toast.key,
                value: Value::Bool(false),
            });
        }
        self.outputs.push_event(UiEvent::ToastClosed { id });
    }

    fn open_lightbox(&mut self, source: String) {
        let mut touched = false;
        if let Some(lb) = self.lightbox.as_mut() {
            if !lb.open {
                lb.open = true;
                self.outputs.push_change(Change {
                    key: lb.frame_key.clone(),
                    value: Value::Bool(true),
                });
            }
            lb.source = source.clone();
            self.outputs.push_change(Change {
                key: lb.image_key.clone(),
                value: Value::Text(source.clone()),
            });
            self.outputs.push_event(UiEvent::LightboxOpened { source });
            touched = true;
        }
        if touched {
            self.recompute_scroll_lock();
        }
    }

    fn close_lightbox(&mut self) {
        let mut closed = false;
        if let Some(lb) = self.lightbox.as_mut() {
            if lb.open {
                lb.open = false;
                lb.source.clear();
                self.outputs.push_change(Change {
                    key: lb.frame_key.clone(),
                    value: Value::Bool(false),
                });
                self.outputs.push_change(Change {
                    key: lb.image_key.clone(),
                    value: Value::Text(String::new()),
                });
                self.outputs.push_event(UiEvent::LightboxClosed);
                closed = true;
            }
        }
        if closed {
            self.recompute_scroll_lock();
        }
    }

    fn apply_filter(&mut self, category: String) {
        if self.filter_items.is_empty() {
            return;
        }
        let mut visible = 0;
        for item in &self.filter_items {
            let shown = item.matches(&category);
            visible += usize::from(shown);
            self.outputs.push_change(Change {
                key: item.key.clone(),
                value: Value::Bool(shown),
            });
        }
        self.outputs.push_event(UiEvent::FilterApplied {
            category: category.clone(),
            visible,
        });
        self.active_category = category;
    }

    fn scroll_to_anchor(&mut self, name: String) {
        let Some(top) = self.anchors.get(&name).copied() else {
            warn!("ignoring ScrollToAnchor for unknown anchor {name:?}");
            return;
        };
        let target = (top - self.cfg.anchor_offset_px).clamp(0.0, self.viewport.max_scroll());
        self.tween = Some(ScrollTween {
            anchor: name,
            from: self.viewport.scroll_top,
            to: target,
            started_ms: self.clock_ms,
            duration_ms: self.cfg.scroll_duration_ms,
            easing: self.cfg.scroll_easing,
        });
    }

    /// The nav and the lightbox both lock body scrolling; the emitted lock
    /// is their OR, and only transitions are emitted.
    fn recompute_scroll_lock(&mut self) {
        let locked = self.nav.as_ref().map_or(false, |n| n.open)
            || self.lightbox.as_ref().map_or(false, |lb| lb.open);
        if locked != self.scroll_locked {
            self.scroll_locked = locked;
            self.outputs.push_change(Change {
                key: SCROLL_LOCK_KEY.to_string(),
                value: Value::Bool(locked),
            });
        }
    }
}
