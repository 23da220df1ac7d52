// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select basics.
//!
//! Normalize grouped options, click through a multiple select with a cap,
//! reconcile an external value, and print what the anchor and form would show.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_select_demos --example select_basics`

use tracing_subscriber::EnvFilter;
use understory_options::{RawOption, Value};
use understory_select::{AnchorContent, Select, SelectConfig, Target};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let items = vec![
        RawOption::leaf("tea", "Tea"),
        RawOption::group("coffee", "Coffee"),
        RawOption::leaf("espresso", "Espresso"),
        RawOption::leaf("latte", "Latte"),
        RawOption::leaf("mocha", "Mocha").disabled(),
        RawOption::group("juice", "Juice"),
        RawOption::leaf("orange", "Orange"),
        RawOption::leaf("apple", "Apple"),
    ];

    let config = SelectConfig::multiple()
        .with_max_select(3)
        .with_group_collapse(true)
        .with_name("drinks")
        .with_placeholder("Pick drinks");
    let mut select = match Select::new(&items, config) {
        Ok(select) => select,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };

    print_anchor(&select);
    select.open();

    // Coffee cascades over its enabled children; Mocha is disabled.
    let event = select.click(&Target::Group(1));
    println!("click Coffee -> {event:?}");
    print_anchor(&select);

    // Only one slot is left, so Apple is dropped.
    let event = select.click(&Target::Group(2));
    println!("click Juice -> {event:?}");
    println!("coffee state: {:?}", select.group_check_state(1));
    println!("juice state: {:?}", select.group_check_state(2));

    // The host pushes a new value; no event is emitted.
    let replaced = select.sync_value(vec![Value::from("tea"), Value::from("apple")]);
    println!("external value replaced selection: {replaced}");
    print_anchor(&select);

    for field in select.form_fields() {
        println!("<input type=\"hidden\" name=\"{}\" value=\"{}\">", field.name, field.value);
    }
    select.close();
}

fn print_anchor(select: &Select) {
    match select.anchor_content() {
        AnchorContent::Placeholder(text) => println!("anchor: placeholder {text:?}"),
        AnchorContent::SearchInput(term) => println!("anchor: search input {term:?}"),
        AnchorContent::Values(display) => {
            let labels: Vec<_> = display.entries.iter().map(|e| e.label()).collect();
            println!("anchor: {} (+{})", labels.join(", "), display.remaining);
        }
    }
}
