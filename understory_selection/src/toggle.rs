// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure selection transitions: cascading toggles, group status, and set equality.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use understory_options::{Group, Node, Value};

/// Toggle `members` against `current`.
///
/// - If every member is already selected, all members are removed.
/// - Otherwise missing members are appended in order until the selection
///   holds `max_select` values; the rest are dropped without error.
///   `max_select <= 0` means unlimited.
///
/// Members already present keep their position.
///
/// ```
/// use understory_options::Value;
/// use understory_selection::toggle_values;
///
/// let current = [Value::from(1)];
/// let group = [Value::from(2), Value::from(3)];
/// assert_eq!(toggle_values(&group, &current, 2), [Value::from(1), Value::from(2)]);
/// ```
pub fn toggle_values(members: &[Value], current: &[Value], max_select: i64) -> Vec<Value> {
    if members.iter().all(|m| current.contains(m)) {
        return current
            .iter()
            .filter(|v| !members.contains(v))
            .cloned()
            .collect();
    }

    let cap = usize::try_from(max_select).ok().filter(|&n| n > 0);
    let mut next = current.to_vec();
    for (i, member) in members.iter().enumerate() {
        if next.contains(member) {
            continue;
        }
        if cap.is_some_and(|c| next.len() >= c) {
            tracing::trace!(
                max_select,
                dropped = members.len() - i,
                "selection cap reached; dropping remaining members"
            );
            break;
        }
        next.push(member.clone());
    }
    next
}

/// Values a toggle of `node` acts on: the leaf itself, or a group's enabled children.
pub fn members<T>(node: &Node<T>) -> Vec<Value> {
    match node {
        Node::Leaf(leaf) => alloc::vec![leaf.value.clone()],
        Node::Group(group) => group.enabled_values().cloned().collect(),
    }
}

/// Toggle a tree node against `current`; see [`toggle_values`].
///
/// Disabled nodes are a no-op and return `current` unchanged.
pub fn toggle<T>(node: &Node<T>, current: &[Value], max_select: i64) -> Vec<Value> {
    if node.is_disabled() {
        return current.to_vec();
    }
    toggle_values(&members(node), current, max_select)
}

/// Tri-state checkbox state of a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckState {
    /// No member selected.
    Unchecked,
    /// Some but not all members selected.
    Mixed,
    /// All members selected.
    Checked,
}

/// Selection status of a group's members.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GroupStatus {
    /// The group has members and every one is selected.
    pub all: bool,
    /// At least one, but not every, member is selected.
    pub some: bool,
}

impl GroupStatus {
    /// Checkbox state for this status.
    pub fn check_state(self) -> CheckState {
        if self.all {
            CheckState::Checked
        } else if self.some {
            CheckState::Mixed
        } else {
            CheckState::Unchecked
        }
    }
}

/// Compute the status of `group` under `selection`.
pub fn group_status<T>(group: &Group<T>, selection: &[Value]) -> GroupStatus {
    let total = group.children.len();
    let selected = group.values().filter(|v| selection.contains(v)).count();
    GroupStatus {
        all: total > 0 && selected == total,
        some: selected > 0 && selected < total,
    }
}

/// Set equality of two selections, ignoring order, duplicates, and falsy
/// values (empty text and zero, see [`Value::is_falsy`]).
///
/// ```
/// use understory_options::Value;
/// use understory_selection::is_equals;
///
/// let a = [Value::from(1), Value::from(2), Value::from(2)];
/// let b = [Value::from(2), Value::from(""), Value::from(0), Value::from(1)];
/// assert!(is_equals(&a, &b));
/// ```
pub fn is_equals(a: &[Value], b: &[Value]) -> bool {
    fn set(values: &[Value]) -> BTreeSet<&Value> {
        values.iter().filter(|v| !v.is_falsy()).collect()
    }
    set(a) == set(b)
}
