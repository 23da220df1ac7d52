// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical option tree: an ordered sequence of leaves and one-level groups.

use alloc::string::String;
use alloc::vec::Vec;

use crate::source::RawOption;
use crate::value::Value;

/// A selectable option.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf<T = RawOption> {
    /// Identifier, unique across the tree.
    pub value: Value,
    /// Display label.
    pub label: String,
    /// Disabled options cannot be toggled.
    pub disabled: bool,
    /// Copy of the record this leaf was built from.
    pub data: T,
}

/// A one-level container of leaves.
///
/// Groups never contain groups. A group may carry its own identifier, but it
/// is never part of a selection; selecting a group cascades to its children.
#[derive(Clone, Debug, PartialEq)]
pub struct Group<T = RawOption> {
    /// Optional identifier.
    pub value: Option<Value>,
    /// Display label.
    pub label: String,
    /// Disabled groups cannot be toggled.
    pub disabled: bool,
    /// Copy of the record this group was built from.
    pub data: T,
    /// Member options in display order.
    pub children: Vec<Leaf<T>>,
}

impl<T> Group<T> {
    /// Values of all children, in display order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.children.iter().map(|c| &c.value)
    }

    /// Values of enabled children, in display order.
    pub fn enabled_values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.children
            .iter()
            .filter(|c| !c.disabled)
            .map(|c| &c.value)
    }
}

/// A node of the canonical tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<T = RawOption> {
    /// A selectable option.
    Leaf(Leaf<T>),
    /// A group of options.
    Group(Group<T>),
}

impl<T> Node<T> {
    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(l) => &l.label,
            Self::Group(g) => &g.label,
        }
    }

    /// Identifier, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Leaf(l) => Some(&l.value),
            Self::Group(g) => g.value.as_ref(),
        }
    }

    /// Whether the node is disabled.
    pub fn is_disabled(&self) -> bool {
        match self {
            Self::Leaf(l) => l.disabled,
            Self::Group(g) => g.disabled,
        }
    }

    /// Whether the node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// The leaf, if this node is one.
    pub fn as_leaf(&self) -> Option<&Leaf<T>> {
        match self {
            Self::Leaf(l) => Some(l),
            Self::Group(_) => None,
        }
    }

    /// The group, if this node is one.
    pub fn as_group(&self) -> Option<&Group<T>> {
        match self {
            Self::Group(g) => Some(g),
            Self::Leaf(_) => None,
        }
    }

    /// The copied source record.
    pub fn data(&self) -> &T {
        match self {
            Self::Leaf(l) => &l.data,
            Self::Group(g) => &g.data,
        }
    }
}

/// Ordered tree of leaves and groups produced by [`normalize`](crate::normalize).
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<T = RawOption> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> Tree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from nodes in display order.
    ///
    /// No validation is applied; trees built by [`normalize`](crate::normalize)
    /// are checked for duplicate values.
    pub fn from_nodes(nodes: Vec<Node<T>>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in display order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Consume the tree, returning its nodes.
    pub fn into_nodes(self) -> Vec<Node<T>> {
        self.nodes
    }

    /// Iterate top-level nodes.
    pub fn iter(&self) -> core::slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level node at `index`.
    pub fn get(&self, index: usize) -> Option<&Node<T>> {
        self.nodes.get(index)
    }

    /// Group at top-level `index`, if that node is a group.
    pub fn group(&self, index: usize) -> Option<&Group<T>> {
        self.get(index).and_then(Node::as_group)
    }

    /// All leaves, flattened in display order.
    pub fn leaves(&self) -> impl Iterator<Item = &Leaf<T>> + '_ {
        self.nodes.iter().flat_map(|n| match n {
            Node::Leaf(l) => core::slice::from_ref(l),
            Node::Group(g) => g.children.as_slice(),
        })
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Find the leaf with the given value.
    pub fn find_leaf(&self, value: &Value) -> Option<&Leaf<T>> {
        self.leaves().find(|l| &l.value == value)
    }

    /// Index of the top-level group with the given value.
    pub fn group_index(&self, value: &Value) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.is_group() && n.value() == Some(value))
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a Node<T>;
    type IntoIter = core::slice::Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn leaf(value: i64, label: &str) -> Leaf<()> {
        Leaf {
            value: Value::Int(value),
            label: label.into(),
            disabled: false,
            data: (),
        }
    }

    fn sample() -> Tree<()> {
        Tree::from_nodes(vec![
            Node::Leaf(leaf(1, "A")),
            Node::Group(Group {
                value: Some(Value::from("g")),
                label: "G".into(),
                disabled: false,
                data: (),
                children: vec![leaf(2, "B"), Leaf { disabled: true, ..leaf(3, "C") }],
            }),
        ])
    }

    #[test]
    fn leaves_flatten_in_display_order() {
        let tree = sample();
        let values: Vec<_> = tree.leaves().map(|l| l.value.clone()).collect();
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn lookups() {
        let tree = sample();
        assert_eq!(tree.find_leaf(&Value::Int(2)).unwrap().label, "B");
        assert!(tree.find_leaf(&Value::Int(9)).is_none());
        assert_eq!(tree.group_index(&Value::from("g")), Some(1));
        assert!(tree.group(0).is_none());
        let group = tree.group(1).unwrap();
        assert_eq!(group.enabled_values().count(), 1);
        assert_eq!(group.values().count(), 2);
    }
}
