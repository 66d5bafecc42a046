use vitrine_page_core::{
    config::Config,
    engine::Engine,
    inputs::{Command, Inputs},
    outputs::{Change, UiEvent},
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

fn rect(top: f32) -> ElementRect {
    ElementRect { top, height: 60.0 }
}

fn scroll(top: f32) -> Inputs {
    Inputs::one(Command::Scroll { top })
}

fn float_changes_for<'a>(changes: &'a [Change], key: &str) -> Vec<f32> {
    changes
        .iter()
        .filter(|c| c.key == key)
        .filter_map(|c| c.value.as_float())
        .collect()
}

/// it should animate from 0 to the exact target over the configured duration
#[test]
fn target_100_reaches_exactly_100() {
    let mut engine = Engine::new(Config::default());
    engine.set_viewport(viewport_800());
    engine.register_counter("stats.projects", rect(2000.0), "100");

    // Below the fold: nothing happens without a scroll.
    let out = engine.update(0.0, Inputs::none());
    assert!(out.is_empty());

    // Scroll the counter into full view; it activates at value 0.
    let out = engine.update(0.0, scroll(1300.0));
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::CounterStarted { key } if key == "stats.projects"
    )));
    assert_eq!(float_changes_for(&out.changes, "stats.projects"), vec![0.0]);

    // Halfway through 1200ms the displayed value is half the target.
    let out = engine.update(0.6, Inputs::none());
    assert_eq!(float_changes_for(&out.changes, "stats.projects"), vec![50.0]);

    // At the full duration the value is exactly the target.
    let out = engine.update(0.6, Inputs::none());
    assert_eq!(
        float_changes_for(&out.changes, "stats.projects"),
        vec![100.0]
    );
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::CounterFinished { key, target: 100 } if key == "stats.projects"
    )));
}

/// it should emit a non-decreasing value sequence bounded by the target
#[test]
fn values_are_monotone_and_bounded() {
    let mut engine = Engine::new(Config::default());
    engine.set_viewport(viewport_800());
    engine.register_counter("stats.clients", rect(100.0), "47");

    let mut seen: Vec<f32> = Vec::new();
    for _ in 0..40 {
        let out = engine.update(0.04, Inputs::none());
        seen.extend(float_changes_for(&out.changes, "stats.clients"));
    }
    assert!(!seen.is_empty());
    for pair in seen.windows(2) {
        assert!(pair[1] >= pair[0], "sequence decreased: {pair:?}");
    }
    for v in &seen {
        assert!(*v <= 47.0);
    }
    assert_eq!(*seen.last().unwrap(), 47.0);
}

/// it should never re-animate a finished counter and stop requesting frames
#[test]
fn done_is_terminal() {
    let mut engine = Engine::new(Config::default());
    engine.set_viewport(viewport_800());
    engine.register_counter("stats.awards", rect(100.0), "9");

    engine.update(0.0, Inputs::none());
    assert!(engine.needs_frame());
    engine.update(1.2, Inputs::none());
    assert_eq!(engine.counter_value("stats.awards"), Some(9));
    assert!(!engine.needs_frame());

    // Further ticks and scroll ticks over the same element are no-ops.
    let out = engine.update(0.5, scroll(10.0));
    assert!(float_changes_for(&out.changes, "stats.awards").is_empty());
    assert!(!out
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::CounterStarted { .. })));
}

/// it should treat a non-numeric target as 0 and complete immediately
#[test]
fn garbage_target_completes_at_zero() {
    let mut engine = Engine::new(Config::default());
    engine.set_viewport(viewport_800());
    engine.register_counter("stats.bogus", rect(100.0), "not-a-number");

    let out = engine.update(0.0, Inputs::none());
    assert_eq!(float_changes_for(&out.changes, "stats.bogus"), vec![0.0]);
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::CounterFinished { key, target: 0 } if key == "stats.bogus"
    )));
    assert!(!engine.needs_frame());
}

/// it should coerce a target with trailing garbage by its integer prefix
#[test]
fn prefix_target_animates_to_prefix() {
    let mut engine = Engine::new(Config::default());
    engine.set_viewport(viewport_800());
    engine.register_counter("stats.px", rect(100.0), "120px");

    engine.update(0.0, Inputs::none());
    let out = engine.update(1.2, Inputs::none());
    assert_eq!(float_changes_for(&out.changes, "stats.px"), vec![120.0]);
}

/// it should animate two counters independently when they enter on different ticks
#[test]
fn independent_counters() {
    let mut engine = Engine::new(Config::default());
    engine.set_viewport(viewport_800());
    engine.register_counter("stats.a", rect(900.0), "40");
    engine.register_counter("stats.b", rect(1700.0), "80");

    // First scroll brings only the first counter into view.
    let out = engine.update(0.0, scroll(200.0));
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::CounterStarted { key } if key == "stats.a"
    )));
    assert!(!out.events.iter().any(|e| matches!(
        e,
        UiEvent::CounterStarted { key } if key == "stats.b"
    )));

    // Let the first run half its course, then bring in the second.
    engine.update(0.6, Inputs::none());
    let out = engine.update(0.0, scroll(1000.0));
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::CounterStarted { key } if key == "stats.b"
    )));

    // Both finish at their own targets.
    engine.update(0.6, Inputs::none());
    let out = engine.update(0.6, Inputs::none()).clone();
    assert_eq!(engine.counter_value("stats.a"), Some(40));
    assert_eq!(engine.counter_value("stats.b"), Some(80));
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::CounterFinished { key, target: 80 } if key == "stats.b"
    )));
    assert!(!engine.needs_frame());
}
