//! Page manifest: a JSON description of one page's interactive elements.
//!
//! Hosts typically collect this from page markup once at startup and feed it
//! to `Engine::load_manifest`; tests share the same path via fixtures. This
//! is the only fallible surface of the crate.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::viewport::ElementRect;
use crate::widgets::Theme;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageManifest {
    #[serde(default)]
    pub reveals: Vec<RevealSpec>,
    #[serde(default)]
    pub counters: Vec<CounterSpec>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub nav: Option<String>,
    #[serde(default)]
    pub loader: Option<String>,
    #[serde(default)]
    pub lightbox: Option<LightboxSpec>,
    #[serde(default)]
    pub toasts: Vec<String>,
    #[serde(default)]
    pub filter_items: Vec<FilterItemSpec>,
    #[serde(default)]
    pub slides: Vec<String>,
    #[serde(default)]
    pub anchors: Vec<AnchorSpec>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealSpec {
    pub key: String,
    pub group: String,
    pub rect: ElementRect,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterSpec {
    pub key: String,
    pub rect: ElementRect,
    /// Raw markup attribute; parsed with fail-soft integer coercion at
    /// registration, never here.
    pub target: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightboxSpec {
    pub frame: String,
    pub image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterItemSpec {
    pub key: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnchorSpec {
    pub name: String,
    pub top: f32,
}

/// Parse and validate a page manifest from JSON.
///
/// Validation covers basic well-formedness only: non-empty keys and finite
/// geometry. Counter targets stay raw strings; their coercion is fail-soft
/// and happens at registration.
pub fn parse_page_manifest_json(s: &str) -> Result<PageManifest> {
    let manifest: PageManifest = serde_json::from_str(s)?;
    validate(&manifest)?;
    Ok(manifest)
}

fn require_key(key: &str, what: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::manifest(format!("{what} has an empty key")));
    }
    Ok(())
}

fn require_finite_rect(rect: &ElementRect, what: &str, key: &str) -> Result<()> {
    if !rect.top.is_finite() || !rect.height.is_finite() {
        return Err(Error::manifest(format!(
            "{what} '{key}' has non-finite geometry"
        )));
    }
    Ok(())
}

fn validate(m: &PageManifest) -> Result<()> {
    for r in &m.reveals {
        require_key(&r.key, "reveal")?;
        require_finite_rect(&r.rect, "reveal", &r.key)?;
    }
    for c in &m.counters {
        require_key(&c.key, "counter")?;
        require_finite_rect(&c.rect, "counter", &c.key)?;
    }
    for key in [&m.header, &m.nav, &m.loader].into_iter().flatten() {
        require_key(key, "widget")?;
    }
    if let Some(lb) = &m.lightbox {
        require_key(&lb.frame, "lightbox frame")?;
        require_key(&lb.image, "lightbox image")?;
    }
    for key in &m.toasts {
        require_key(key, "toast")?;
    }
    for item in &m.filter_items {
        require_key(&item.key, "filter item")?;
    }
    for key in &m.slides {
        require_key(key, "slide")?;
    }
    for a in &m.anchors {
        require_key(&a.name, "anchor")?;
        if !a.top.is_finite() {
            return Err(Error::manifest(format!(
                "anchor '{}' has non-finite top",
                a.name
            )));
        }
    }
    Ok(())
}
