// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_select --heading-base-level=0

//! Understory Select: a headless select widget.
//!
//! ## Overview
//!
//! [`Select`] ties the select engine together behind the interactions a
//! rendered widget forwards to it:
//!
//! - options are normalized once with [`understory_options`] and rebuilt with
//!   [`Select::set_options`];
//! - clicks, chip removal, and clearing go through [`understory_selection`] and
//!   return a [`ChangeEvent`];
//! - the search term filters and highlights options with [`understory_search`];
//! - [`Select::placement`] positions the panel with [`understory_placement`],
//!   switching to a modal or sheet on small screens.
//!
//! The controller never renders. Hosts read [`Select::anchor_content`],
//! [`Select::visible_tree`], and [`Select::form_fields`] and draw them however
//! they like.
//!
//! Configuration lives in [`SelectConfig`]; with the `serde` feature it can be
//! deserialized from JSON or any other serde format.
//!
//! # Example
//!
//! ```rust
//! use understory_options::{RawOption, Value};
//! use understory_select::{EventValue, Select, SelectConfig, Target};
//!
//! let items = vec![
//!     RawOption::leaf("js", "JavaScript"),
//!     RawOption::group("sys", "Systems"),
//!     RawOption::leaf("rs", "Rust"),
//!     RawOption::leaf("zig", "Zig"),
//! ];
//! let config = SelectConfig::multiple().with_max_select(2).with_name("langs");
//! let mut select = Select::new(&items, config)
//!     .unwrap()
//!     .with_value(Value::from("js"));
//!
//! select.open();
//! let event = select.click(&Target::Group(1)).unwrap();
//! assert_eq!(
//!     event.value,
//!     EventValue::Many(vec![Value::from("js"), Value::from("rs")]),
//! );
//!
//! let fields = select.form_fields();
//! assert_eq!(fields[1].name, "langs[]");
//! assert_eq!(fields[1].value, "rs");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod display;
pub mod event;
pub mod select;

pub use config::{MatchKind, SearchConfig, SearchPosition, SelectConfig};
pub use display::{DisplayEntry, DisplayValue, display_value};
pub use event::{ChangeEvent, EventValue, FormField, form_fields};
pub use select::{AnchorContent, Select, Target};
