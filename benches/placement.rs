// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for tooltip placement.
//!
//! Measures the pure placement function and a full probe + place pass over
//! an in-memory scene.

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use iced_overlays::config::PlacementConfig;
use iced_overlays::overlay::{place, probe, ElementId, Geometry, Scene};
use std::hint::black_box;

const ANCHOR: ElementId = ElementId::from_static("bench-anchor");

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let config = PlacementConfig::default();
    let viewport = Size::new(1280.0, 800.0);
    let anchor = Geometry {
        top: 40.0,
        right: 1100.0,
        bottom: 720.0,
        left: 60.0,
        width: 120.0,
        height: 40.0,
    };
    let body = Geometry {
        width: 240.0,
        height: 60.0,
        ..Geometry::default()
    };

    group.bench_function("place", |b| {
        b.iter(|| {
            black_box(place(
                black_box(&anchor),
                black_box(&body),
                None,
                viewport,
                &config,
            ))
        });
    });

    group.finish();
}

fn bench_probe_and_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let config = PlacementConfig::default();
    let mut scene = Scene::new(Size::new(1280.0, 800.0));
    scene.place(
        ANCHOR,
        Rectangle::new(Point::new(1100.0, 700.0), Size::new(120.0, 40.0)),
    );
    scene.place(
        ElementId::TOOLTIP_BODY,
        Rectangle::new(Point::ORIGIN, Size::new(240.0, 60.0)),
    );

    group.bench_function("probe_and_place", |b| {
        b.iter(|| {
            let anchor = probe(&scene, &ANCHOR).unwrap();
            let body = probe(&scene, &ElementId::TOOLTIP_BODY).unwrap_or_default();
            black_box(place(&anchor, &body, None, Size::new(1280.0, 800.0), &config))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_place, bench_probe_and_place);
criterion_main!(benches);
