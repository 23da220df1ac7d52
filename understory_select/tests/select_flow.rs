// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end controller flows: controlled values, responsive placement, and logging.

use kurbo::Rect;
use tracing_test::traced_test;
use understory_options::{RawOption, TreeMode, Value};
use understory_placement::{
    Breakpoint, Length, PlacementConfig, PlacementMode, Responsive, Side, Viewport,
};
use understory_select::{AnchorContent, EventValue, Select, SelectConfig, Target};

fn regions() -> Vec<RawOption> {
    vec![
        RawOption::leaf("eu", "Europe"),
        RawOption::leaf("pt", "Portugal").with_attr("parent", "eu"),
        RawOption::leaf("es", "España").with_attr("parent", "eu"),
        RawOption::leaf("am", "Americas"),
        RawOption::leaf("br", "Brasil").with_attr("parent", "am"),
        RawOption::leaf("aq", "Antarctica"),
    ]
}

fn select(config: SelectConfig) -> Select {
    Select::new(&regions(), config.with_tree_mode(TreeMode::ChildReference)).unwrap()
}

#[test]
fn controlled_value_replaces_without_events() {
    let mut s = select(SelectConfig::multiple());
    s.click(&Target::Leaf(Value::from("pt")));
    assert!(!s.sync_value(vec![Value::from("pt")]));
    assert!(s.sync_value(vec![Value::from("br"), Value::from("es")]));
    assert_eq!(s.selected(), &[Value::from("br"), Value::from("es")]);

    // Display follows tree order, not selection order.
    let AnchorContent::Values(d) = s.anchor_content() else {
        panic!("expected values");
    };
    let labels: Vec<_> = d.entries.iter().map(|e| e.label()).collect();
    assert_eq!(labels, ["España", "Brasil"]);
}

#[test]
fn group_collapse_in_anchor() {
    let mut s = select(SelectConfig::multiple().with_group_collapse(true));
    s.click(&Target::Group(0));
    s.click(&Target::Leaf(Value::from("aq")));
    let AnchorContent::Values(d) = s.anchor_content() else {
        panic!("expected values");
    };
    let labels: Vec<_> = d.entries.iter().map(|e| e.label()).collect();
    assert_eq!(labels, ["Europe", "Antarctica"]);
}

#[test]
fn small_screens_switch_to_sheet() {
    let config = SelectConfig::single()
        .with_placement(PlacementConfig::default().with_sheet_height(300.0))
        .with_responsive(Responsive::new(Breakpoint::Sm, PlacementMode::FixedSheet));
    let s = select(config);
    let anchor = Rect::new(10.0, 100.0, 210.0, 140.0);

    let phone = s.placement(anchor, Viewport::new(390.0, 800.0), 120.0);
    assert_eq!(phone.side, Side::Bottom);
    assert_eq!((phone.top, phone.width), (500.0, Length::Px(390.0)));

    let desktop = s.placement(anchor, Viewport::new(1280.0, 800.0), 120.0);
    assert_eq!(desktop.side, Side::Below);
    assert_eq!((desktop.top, desktop.height), (144.0, Some(120.0)));
}

#[test]
fn single_mode_event_is_a_scalar() {
    let mut s = select(SelectConfig::single().with_name("region"));
    let e = s.click(&Target::Leaf(Value::from("aq"))).unwrap();
    assert_eq!(e.name.as_deref(), Some("region"));
    assert_eq!(e.value, EventValue::One(Value::from("aq")));
    assert_eq!(s.form_fields()[0].value, "aq");
}

#[test]
#[traced_test]
fn lifecycle_is_logged() {
    let mut s = select(SelectConfig::multiple());
    s.open();
    s.sync_value(vec![Value::from("pt")]);
    s.close();
    assert!(logs_contain("select opened"));
    assert!(logs_contain("external value diverged"));
    assert!(logs_contain("select closed"));
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;
    use understory_select::{MatchKind, SearchPosition};
    use understory_selection::SelectMode;

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{
            "mode": "multiple",
            "max_select": 3,
            "tree_mode": "child-reference",
            "search": { "enabled": true, "position": "dropdown", "matching": "contains" },
            "display_count": 2,
            "placement": { "mode": "legacy", "offset": 8, "menu_width": { "fixed": { "percent": 50 } } },
            "responsive": { "breakpoint": "lg", "small_screen": "fixed-modal" }
        }"#;
        let config: SelectConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, SelectMode::Multiple);
        assert_eq!(config.max_select, 3);
        assert!(config.keep_on_select);
        assert_eq!(config.search.position, SearchPosition::Dropdown);
        assert_eq!(config.search.matching, MatchKind::Contains);
        assert_eq!(config.placement.mode, PlacementMode::Legacy);
        assert_eq!(config.placement.offset, 8.0);
        assert_eq!(config.responsive.breakpoint, Breakpoint::Lg);
        assert_eq!(config.responsive.small_screen, Some(PlacementMode::FixedModal));
        assert_eq!(config.search.highlight.tag, "span");

        let s = Select::new(&regions(), config).unwrap();
        assert_eq!(s.tree().len(), 3);
    }

    #[test]
    fn events_serialize_like_form_values() {
        let mut s = select(SelectConfig::multiple().with_name("r"));
        let e = s.click(&Target::Group(1)).unwrap();
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            r#"{"name":"r","value":["br"]}"#
        );
    }
}
