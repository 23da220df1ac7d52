// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel placement.
//!
//! Place a dropdown for anchors at the top and bottom of a window, then show
//! how a narrow viewport switches to a bottom sheet. Recompute triggers are
//! coalesced the way a host would do it once per frame.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_select_demos --example placement`

use kurbo::{Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_options::RawOption;
use understory_placement::{
    Breakpoint, PlacementConfig, PlacementMode, RecomputeTrigger, Responsive, Viewport,
};
use understory_select::{Select, SelectConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let items: Vec<RawOption> = (0..40)
        .map(|i| RawOption::leaf(i, format!("Item {i}")))
        .collect();
    let config = SelectConfig::single()
        .with_placement(
            PlacementConfig::default()
                .with_menu_width(240.0)
                .with_max_height("50%")
                .with_sheet_height("60%"),
        )
        .with_responsive(Responsive::new(Breakpoint::Sm, PlacementMode::FixedSheet));
    let mut select = match Select::new(&items, config) {
        Ok(select) => select,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };

    let content_height = 40.0 * 32.0;
    let desktop = Viewport::new(1280.0, 720.0).with_scroll(Vec2::new(0.0, 300.0));
    let phone = Viewport::new(390.0, 844.0);

    select.open();
    for (name, anchor) in [
        ("top", Rect::new(40.0, 60.0, 240.0, 96.0)),
        ("bottom", Rect::new(1150.0, 640.0, 1270.0, 676.0)),
        ("hidden", Rect::ZERO),
    ] {
        let p = select.placement(anchor, desktop, content_height);
        println!(
            "{name:>6}: side={:?} top={} left={} width={} height={:?}",
            p.side, p.top, p.left, p.width, p.height
        );
    }

    let sheet = select.placement(Rect::new(10.0, 200.0, 380.0, 240.0), phone, content_height);
    println!(" phone: side={:?} top={} height={:?}", sheet.side, sheet.top, sheet.height);

    // A burst of events between two frames collapses into one recompute.
    let _ = select.take_recompute();
    select.record_trigger(RecomputeTrigger::VIEWPORT_SCROLL);
    select.record_trigger(RecomputeTrigger::VIEWPORT_SCROLL);
    select.record_trigger(RecomputeTrigger::ANCHOR_RESIZE);
    println!("next frame recomputes for {:?}", select.take_recompute());
    select.close();
}
