// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_options --heading-base-level=0

//! Understory Options: canonical option trees for headless select widgets.
//!
//! Select widgets are fed options in many shapes. This crate turns them into one
//! ordered tree of leaves and one-level groups that the rest of the select stack
//! (selection, search, rendering) can rely on.
//!
//! - [`normalize`] converts a slice of records into a [`Tree`] according to a [`TreeMode`].
//! - [`OptionSource`] is the read-only view the normalizer needs; [`RawOption`] is a
//!   ready-made dynamic record implementing it.
//! - [`Hooks`] inject value, label, and group strategies without touching the records.
//! - Configuration mistakes (duplicate values, missing values, deep nesting, dangling
//!   references) are reported eagerly as [`NormalizeError`].
//!
//! ## Input shapes
//!
//! | Mode | Shape |
//! |------|-------|
//! | [`TreeMode::FlatGroups`] | `[A, G*, B, C]`: a group marker collects the options after it |
//! | [`TreeMode::ParentPointer`] | `[G { children: [B, C] }]` |
//! | [`TreeMode::ChildReference`] | `[G, B { parent: G }, C { parent: G }]` |
//!
//! In the nested and referencing modes a record is a group exactly when it ends up
//! with at least one child; a record marked as a group with no children becomes a leaf.
//!
//! # Example
//!
//! ```rust
//! use understory_options::{normalize, Node, NormalizeOptions, RawOption, TreeMode, Value};
//!
//! let items = vec![
//!     RawOption::leaf("fruits", "Fruits"),
//!     RawOption::leaf(1, "Apple").with_attr("parent", "fruits"),
//!     RawOption::leaf(2, "Pear").with_attr("parent", "fruits"),
//!     RawOption::leaf(3, "Water"),
//! ];
//!
//! let tree = normalize(&items, &NormalizeOptions::new(TreeMode::ChildReference)).unwrap();
//! assert!(matches!(tree.get(0), Some(Node::Group(g)) if g.children.len() == 2));
//!
//! let leaves: Vec<_> = tree.leaves().map(|l| l.label.as_str()).collect();
//! assert_eq!(leaves, ["Apple", "Pear", "Water"]);
//! assert!(tree.find_leaf(&Value::from(3)).is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod normalize;
pub mod source;
pub mod tree;
pub mod value;

pub use error::NormalizeError;
pub use normalize::{Hooks, NormalizeOptions, TreeMode, normalize};
pub use source::{OptionSource, RawOption};
pub use tree::{Group, Leaf, Node, Tree};
pub use value::{Value, ValueInput};
