// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the anchor shows for the current selection.

use alloc::vec::Vec;

use understory_options::{Group, Leaf, Node, Tree, Value};
use understory_selection::group_status;

/// One entry of the value display.
#[derive(Debug)]
pub enum DisplayEntry<'a, T> {
    /// A selected option.
    Leaf(&'a Leaf<T>),
    /// A fully selected group shown as one entry.
    Group(&'a Group<T>),
}

impl<T> DisplayEntry<'_, T> {
    /// Label to show.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(l) => &l.label,
            Self::Group(g) => &g.label,
        }
    }
}

impl<T> Clone for DisplayEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DisplayEntry<'_, T> {}

/// Selected entries in tree order, plus how many were left out.
#[derive(Clone, Debug)]
pub struct DisplayValue<'a, T> {
    /// Entries to show.
    pub entries: Vec<DisplayEntry<'a, T>>,
    /// Entries hidden by the display count.
    pub remaining: usize,
}

impl<T> DisplayValue<'_, T> {
    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.remaining == 0
    }
}

/// Collect the display entries for `selected`.
///
/// Entries follow tree order, not selection order. Selected values missing
/// from the tree are not shown. With `group_collapse`, a fully selected group
/// appears as a single entry; partially selected groups always list their
/// selected children. `display_count > 0` keeps that many entries and counts
/// the rest in [`DisplayValue::remaining`].
pub fn display_value<'a, T>(
    tree: &'a Tree<T>,
    selected: &[Value],
    group_collapse: bool,
    display_count: usize,
) -> DisplayValue<'a, T> {
    let mut entries = Vec::new();
    for node in tree {
        match node {
            Node::Leaf(leaf) => {
                if selected.contains(&leaf.value) {
                    entries.push(DisplayEntry::Leaf(leaf));
                }
            }
            Node::Group(group) => {
                if group_collapse && group_status(group, selected).all {
                    entries.push(DisplayEntry::Group(group));
                } else {
                    entries.extend(
                        group
                            .children
                            .iter()
                            .filter(|c| selected.contains(&c.value))
                            .map(DisplayEntry::Leaf),
                    );
                }
            }
        }
    }

    let mut remaining = 0;
    if display_count > 0 && entries.len() > display_count {
        remaining = entries.len() - display_count;
        entries.truncate(display_count);
    }
    DisplayValue { entries, remaining }
}
