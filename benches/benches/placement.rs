// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};
use understory_placement::{PlacementConfig, PlacementMode, Viewport, compute_placement};

fn gen_anchors(count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let y = (i * 37 % 760) as f64;
            let x = (i * 53 % 1000) as f64;
            Rect::new(x, y, x + 180.0, y + 32.0)
        })
        .collect()
}

fn bench_placement(c: &mut Criterion) {
    let anchors = gen_anchors(1024);
    let viewport = Viewport::new(1024.0, 768.0).with_scroll(Vec2::new(0.0, 400.0));
    let mut group = c.benchmark_group("placement");
    for mode in [
        PlacementMode::AutoFit,
        PlacementMode::Legacy,
        PlacementMode::FixedModal,
        PlacementMode::FixedSheet,
    ] {
        let config = PlacementConfig::new(mode).with_menu_width("40%").with_max_height(320.0);
        group.bench_function(format!("{mode:?}_x1024"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &anchor in &anchors {
                    acc += compute_placement(anchor, viewport, 480.0, &config).top;
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
