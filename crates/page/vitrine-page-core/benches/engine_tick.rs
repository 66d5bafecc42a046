use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vitrine_page_core::{
    config::Config,
    engine::Engine,
    inputs::{Command, Inputs},
    viewport::{ElementRect, Viewport},
};

fn populated_engine() -> Engine {
    let mut engine = Engine::new(Config::default());
    engine.set_viewport(Viewport {
        scroll_top: 0.0,
        window_inner_height: Some(800.0),
        client_height: 800.0,
        document_height: Some(20_000.0),
    });
    for i in 0..200 {
        engine.register_reveal(
            format!("reveal.{i}"),
            "fade-up",
            ElementRect {
                top: 100.0 * i as f32,
                height: 80.0,
            },
        );
    }
    for i in 0..50 {
        engine.register_counter(
            format!("counter.{i}"),
            ElementRect {
                top: 300.0 * i as f32,
                height: 60.0,
            },
            "250",
        );
    }
    engine.register_header("header.shrink");
    engine
}

fn bench_scroll_dispatch(c: &mut Criterion) {
    c.bench_function("update_with_scroll_tick", |b| {
        let mut engine = populated_engine();
        let mut top = 0.0f32;
        b.iter(|| {
            top = (top + 37.0) % 19_000.0;
            let out = engine.update(0.016, Inputs::one(Command::Scroll { top }));
            black_box(out.changes.len());
        });
    });
}

fn bench_idle_tick(c: &mut Criterion) {
    c.bench_function("update_idle", |b| {
        let mut engine = populated_engine();
        b.iter(|| {
            let out = engine.update(0.016, Inputs::none());
            black_box(out.is_empty());
        });
    });
}

criterion_group!(benches, bench_scroll_dispatch, bench_idle_tick);
criterion_main!(benches);
