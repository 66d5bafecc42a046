use vitrine_page_core::{
    config::Config,
    easing::Easing,
    engine::Engine,
    inputs::{Command, Inputs},
    outputs::{UiEvent, SCROLL_TOP_KEY},
    viewport::{ElementRect, Viewport},
};

fn viewport_800() -> Viewport {
    Viewport {
        scroll_top: 0.0,
        window_inner_height: Some(800.0),
        client_height: 800.0,
        document_height: Some(5000.0),
    }
}

fn linear_config() -> Config {
    Config {
        scroll_easing: Easing::Linear,
        ..Config::default()
    }
}

fn scroll_top_changes(out: &vitrine_page_core::outputs::Outputs) -> Vec<f32> {
    out.changes
        .iter()
        .filter(|c| c.key == SCROLL_TOP_KEY)
        .filter_map(|c| c.value.as_float())
        .collect()
}

/// it should tween to the anchor and finish exactly on its target
#[test]
fn tween_lands_exactly() {
    let mut engine = Engine::new(linear_config());
    engine.set_viewport(viewport_800());
    engine.register_anchor("contact", 4100.0);

    let out = engine.update(
        0.0,
        Inputs::one(Command::ScrollToAnchor {
            name: "contact".into(),
        }),
    );
    assert_eq!(scroll_top_changes(out), vec![0.0]);
    assert!(engine.needs_frame());

    let out = engine.update(0.3, Inputs::none());
    assert_eq!(scroll_top_changes(out), vec![2050.0]);

    let out = engine.update(0.3, Inputs::none());
    assert_eq!(scroll_top_changes(out), vec![4100.0]);
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::ScrollFinished { anchor } if anchor == "contact"
    )));
    assert_eq!(engine.scroll_top(), 4100.0);
    assert!(!engine.needs_frame());
}

/// it should drive the header and reveals mid-tween, like native scroll events
#[test]
fn tween_dispatches_mid_flight() {
    let mut engine = Engine::new(linear_config());
    engine.set_viewport(viewport_800());
    engine.register_anchor("portfolio", 2250.0);
    engine.register_header("header.shrink");
    engine.register_reveal(
        "portfolio.grid",
        "fade-in",
        ElementRect {
            top: 2300.0,
            height: 900.0,
        },
    );

    engine.update(
        0.0,
        Inputs::one(Command::ScrollToAnchor {
            name: "portfolio".into(),
        }),
    );
    // Half way: offset 1125, past the header threshold and far enough for
    // the reveal lookahead (2300 - 1125 <= 720 is still false; header only).
    let out = engine.update(0.3, Inputs::none());
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::HeaderToggled { shrunk: true })));
    assert_eq!(engine.is_revealed("portfolio.grid"), Some(false));

    let out = engine.update(0.3, Inputs::none()).clone();
    assert_eq!(engine.is_revealed("portfolio.grid"), Some(true));
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::RevealEntered { key, .. } if key == "portfolio.grid"
    )));
}

/// it should cancel the tween when the host reports a user scroll
#[test]
fn user_scroll_cancels_tween() {
    let mut engine = Engine::new(linear_config());
    engine.set_viewport(viewport_800());
    engine.register_anchor("about", 1350.0);

    engine.update(
        0.0,
        Inputs::one(Command::ScrollToAnchor {
            name: "about".into(),
        }),
    );
    engine.update(0.15, Inputs::none());
    assert!(engine.needs_frame());

    let out = engine
        .update(0.15, Inputs::one(Command::Scroll { top: 42.0 }))
        .clone();
    assert_eq!(engine.scroll_top(), 42.0);
    assert!(!engine.needs_frame());
    assert!(!out
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::ScrollFinished { .. })));

    // The dead tween never resumes.
    assert!(engine.update(1.0, Inputs::none()).is_empty());
    assert_eq!(engine.scroll_top(), 42.0);
}

/// it should clamp the tween target to the maximum reachable offset
#[test]
fn target_clamped_to_max_scroll() {
    let mut engine = Engine::new(linear_config());
    engine.set_viewport(viewport_800());
    // Document height 5000, viewport 800: max scroll is 4200.
    engine.register_anchor("footer", 4900.0);

    engine.update(
        0.0,
        Inputs::one(Command::ScrollToAnchor {
            name: "footer".into(),
        }),
    );
    let out = engine.update(0.6, Inputs::none());
    assert_eq!(scroll_top_changes(out), vec![4200.0]);
}

/// it should subtract the configured anchor offset from the target
#[test]
fn anchor_offset_applies() {
    let cfg = Config {
        anchor_offset_px: 100.0,
        ..linear_config()
    };
    let mut engine = Engine::new(cfg);
    engine.set_viewport(viewport_800());
    engine.register_anchor("about", 1350.0);

    engine.update(
        0.0,
        Inputs::one(Command::ScrollToAnchor {
            name: "about".into(),
        }),
    );
    engine.update(0.6, Inputs::none());
    assert_eq!(engine.scroll_top(), 1250.0);
}

/// it should ignore an unknown anchor entirely
#[test]
fn unknown_anchor_is_a_no_op() {
    let mut engine = Engine::new(linear_config());
    engine.set_viewport(viewport_800());

    let out = engine.update(
        0.0,
        Inputs::one(Command::ScrollToAnchor {
            name: "missing".into(),
        }),
    );
    assert!(out.is_empty());
    assert!(!engine.needs_frame());
}
