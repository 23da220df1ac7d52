// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection --heading-base-level=0

//! Understory Selection: selection state transitions for headless select widgets.
//!
//! ## Overview
//!
//! Selections are lists of [`Value`](understory_options::Value)s with set semantics.
//! This crate provides the pure transitions and a small stateful store on top of the
//! canonical tree from [`understory_options`].
//!
//! - [`toggle`] / [`toggle_values`]: the cascading toggle. Clicking a group toggles all
//!   of its enabled children at once; a fully selected target is deselected, otherwise
//!   missing members are added up to `max_select`.
//! - [`group_status`]: `all` / `some` flags for tri-state group checkboxes.
//! - [`is_equals`]: set equality used to reconcile controlled values.
//! - [`SelectionStore`]: holds the selection, applies single/multiple rules, and syncs
//!   with an externally controlled value.
//!
//! ## Capacity
//!
//! `max_select > 0` caps interactive additions. Members past the cap are dropped
//! silently, in traversal order. [`SelectionStore::set_value`] is never capped.
//!
//! # Example
//!
//! ```rust
//! use understory_options::{normalize, NormalizeOptions, RawOption, Value};
//! use understory_selection::{SelectMode, SelectionStore};
//!
//! let items = vec![
//!     RawOption::leaf(1, "A"),
//!     RawOption::group("g", "G"),
//!     RawOption::leaf(2, "B"),
//!     RawOption::leaf(3, "C"),
//! ];
//! let tree = normalize(&items, &NormalizeOptions::default()).unwrap();
//!
//! let mut store = SelectionStore::new(SelectMode::Multiple, 2, vec![Value::from(1)]);
//! store.toggle(tree.get(1).unwrap());
//! assert_eq!(store.selected(), &[Value::from(1), Value::from(2)]);
//!
//! let status = store.group_status(tree.group(1).unwrap());
//! assert!(status.some && !status.all);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod store;
pub mod toggle;

pub use store::{SelectMode, SelectionStore};
pub use toggle::{CheckState, GroupStatus, group_status, is_equals, members, toggle, toggle_values};
