// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search and highlight.
//!
//! Filter an option tree with diacritic-insensitive matching and highlight
//! the matched characters in each visible label.
//!
//! Run:
//! - `cargo run -p understory_select_demos --example search_highlight -- "sao"`

use tracing_subscriber::EnvFilter;
use understory_options::{Node, RawOption};
use understory_search::{HighlightOptions, search_text};
use understory_select::{SearchPosition, Select, SelectConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "sao".to_owned());

    let items = vec![
        RawOption::group("br", "Brasil"),
        RawOption::leaf("sp", "São Paulo"),
        RawOption::leaf("rj", "Rio de Janeiro"),
        RawOption::group("pt", "Portugal"),
        RawOption::leaf("lx", "Lisboa"),
        RawOption::leaf("sj", "São João da Madeira"),
        RawOption::group("vn", "Việt Nam"),
        RawOption::leaf("hn", "Hà Nội"),
        RawOption::leaf("dn", "Đà Nẵng"),
    ];

    let mut config = SelectConfig::single().searchable(SearchPosition::Dropdown);
    config.search.filter.prune_children = true;
    config.search.highlight = HighlightOptions::new()
        .tag("mark")
        .class_name("match")
        .style_property("fontWeight", 600)
        .color("#b45309");

    let mut select = match Select::new(&items, config) {
        Ok(select) => select,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    select.open();
    select.set_search_term(query.as_str());

    println!("query {query:?}");
    for node in select.visible_tree().iter() {
        match node {
            Node::Leaf(leaf) => println!("  {}", select.highlighted_label(&leaf.label)),
            Node::Group(group) => {
                println!("  [{}]", select.highlighted_label(&group.label));
                for child in &group.children {
                    println!("    {}", select.highlighted_label(&child.label));
                }
            }
        }
    }

    for span in search_text("José García, Jose Garcia", "jose garcia") {
        println!("span {}..{} {:?}", span.start, span.end, span.text);
    }
}
