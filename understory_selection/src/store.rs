// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SelectionStore`]: mutable selection state with controlled-value reconciliation.
//!
//! ## Controlled values
//!
//! A host that drives the selection from outside calls [`SelectionStore::sync_external`]
//! whenever its value changes. The store replaces its state wholesale when the
//! external value is not set-equal to the current selection, and ignores it
//! otherwise. Interactive changes ([`SelectionStore::toggle`] and friends) never
//! write back; the caller forwards the returned selection as a change
//! notification.

use alloc::vec;
use alloc::vec::Vec;

use understory_options::{Group, Leaf, Node, Value, ValueInput};

use crate::toggle::{GroupStatus, group_status, is_equals, toggle_values};

/// Selection cardinality.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectMode {
    /// At most one value; clicking a leaf replaces the selection.
    #[default]
    Single,
    /// Any number of values, optionally capped; groups cascade.
    Multiple,
}

/// Current selection plus the rules for changing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    mode: SelectMode,
    max_select: i64,
    selected: Vec<Value>,
}

impl SelectionStore {
    /// Create a store seeded with an initial value.
    pub fn new(mode: SelectMode, max_select: i64, initial: impl Into<ValueInput>) -> Self {
        Self {
            mode,
            max_select,
            selected: initial.into().into_values(),
        }
    }

    /// Selection cardinality.
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Capacity used by interactive toggles; `<= 0` is unlimited.
    pub fn max_select(&self) -> i64 {
        self.max_select
    }

    /// Change the capacity. The current selection is left as is.
    pub fn set_max_select(&mut self, max_select: i64) {
        self.max_select = max_select;
    }

    /// Selected values. Order carries no meaning.
    pub fn selected(&self) -> &[Value] {
        &self.selected
    }

    /// Whether `value` is selected.
    pub fn is_selected(&self, value: &Value) -> bool {
        self.selected.contains(value)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Status of `group` under the current selection.
    pub fn group_status<T>(&self, group: &Group<T>) -> GroupStatus {
        group_status(group, &self.selected)
    }

    /// Apply a click on `node`.
    ///
    /// Returns the new selection when the click was applied, or `None` when it
    /// was ignored (disabled nodes, and groups in single mode).
    pub fn toggle<T>(&mut self, node: &Node<T>) -> Option<&[Value]> {
        match node {
            Node::Leaf(leaf) => self.toggle_leaf(leaf),
            Node::Group(group) => self.toggle_group(group),
        }
    }

    /// Apply a click on a leaf, top-level or inside a group.
    pub fn toggle_leaf<T>(&mut self, leaf: &Leaf<T>) -> Option<&[Value]> {
        if leaf.disabled {
            return None;
        }
        match self.mode {
            SelectMode::Single => self.selected = vec![leaf.value.clone()],
            SelectMode::Multiple => {
                self.selected = toggle_values(
                    core::slice::from_ref(&leaf.value),
                    &self.selected,
                    self.max_select,
                );
            }
        }
        Some(&self.selected)
    }

    /// Apply a click on a group. Ignored in single mode.
    pub fn toggle_group<T>(&mut self, group: &Group<T>) -> Option<&[Value]> {
        if group.disabled || self.mode == SelectMode::Single {
            return None;
        }
        let members: Vec<Value> = group.enabled_values().cloned().collect();
        self.selected = toggle_values(&members, &self.selected, self.max_select);
        Some(&self.selected)
    }

    /// Remove a single value. Returns whether it was selected.
    pub fn remove(&mut self, value: &Value) -> bool {
        let before = self.selected.len();
        self.selected.retain(|v| v != value);
        self.selected.len() != before
    }

    /// Deselect everything. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Replace the selection wholesale.
    ///
    /// Not subject to `max_select`; only interactive toggles enforce the cap.
    pub fn set_value(&mut self, value: impl Into<ValueInput>) {
        self.selected = value.into().into_values();
    }

    /// Reconcile with an externally controlled value.
    ///
    /// Replaces the selection when `external` is not set-equal to it and
    /// returns whether a replacement happened.
    pub fn sync_external(&mut self, external: impl Into<ValueInput>) -> bool {
        let next = external.into().into_values();
        if is_equals(&next, &self.selected) {
            return false;
        }
        tracing::debug!(
            previous = self.selected.len(),
            next = next.len(),
            "external value diverged; replacing selection"
        );
        self.selected = next;
        true
    }
}
