// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization of option collections into a [`Tree`].
//!
//! Three input shapes are supported, selected with [`TreeMode`]:
//!
//! - [`TreeMode::FlatGroups`]: a flat list where group markers open a group
//!   that collects the following options.
//! - [`TreeMode::ParentPointer`]: each record carries its children in a nested
//!   collection.
//! - [`TreeMode::ChildReference`]: each child record names its parent's value.
//!
//! Value, label, and group resolution can be overridden with [`Hooks`].

use alloc::borrow::ToOwned;
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::NormalizeError;
use crate::source::OptionSource;
use crate::tree::{Group, Leaf, Node, Tree};
use crate::value::Value;

/// Shape of the input collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TreeMode {
    /// Flat list with group markers.
    #[default]
    FlatGroups,
    /// Children nested under a key of their parent.
    ParentPointer,
    /// Children reference their parent's value under a key.
    ChildReference,
}

impl TreeMode {
    /// Relation key used when none is configured.
    pub const fn default_key(self) -> &'static str {
        match self {
            Self::FlatGroups | Self::ParentPointer => "children",
            Self::ChildReference => "parent",
        }
    }
}

/// Strategy overrides for reading option records.
///
/// Each hook, when set, takes precedence over the structural accessor of
/// [`OptionSource`]. Value and label hooks fall through to the record when
/// they return `None`; the group hook replaces the structural marker.
pub struct Hooks<T> {
    /// Resolve an option's value.
    pub value: Option<fn(&T) -> Option<Value>>,
    /// Resolve an option's label.
    pub label: Option<fn(&T) -> Option<String>>,
    /// Decide whether an option is a group marker.
    pub is_group: Option<fn(&T) -> bool>,
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            value: None,
            label: None,
            is_group: None,
        }
    }
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Hooks<T> {}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("value", &self.value.is_some())
            .field("label", &self.label.is_some())
            .field("is_group", &self.is_group.is_some())
            .finish()
    }
}

/// Normalization settings.
#[derive(Clone, Debug)]
pub struct NormalizeOptions<T> {
    /// Input shape.
    pub mode: TreeMode,
    /// Relation key override; see [`TreeMode::default_key`].
    pub related_key: Option<String>,
    /// Accessor overrides.
    pub hooks: Hooks<T>,
    /// Use the label as value when an option has none.
    ///
    /// Off by default: a missing value is usually a configuration mistake and
    /// is reported as [`NormalizeError::MissingValue`].
    pub label_as_value: bool,
}

impl<T> Default for NormalizeOptions<T> {
    fn default() -> Self {
        Self {
            mode: TreeMode::default(),
            related_key: None,
            hooks: Hooks::default(),
            label_as_value: false,
        }
    }
}

impl<T> NormalizeOptions<T> {
    /// Options for the given input shape.
    pub fn new(mode: TreeMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Override the relation key.
    #[must_use]
    pub fn with_related_key(mut self, key: impl Into<String>) -> Self {
        self.related_key = Some(key.into());
        self
    }

    /// Install accessor overrides.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Hooks<T>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Enable or disable the label-as-value fallback.
    #[must_use]
    pub fn with_label_as_value(mut self, enabled: bool) -> Self {
        self.label_as_value = enabled;
        self
    }

    /// The effective relation key.
    pub fn related_key(&self) -> &str {
        self.related_key
            .as_deref()
            .unwrap_or(self.mode.default_key())
    }
}

#[derive(Clone, Debug)]
struct Resolved {
    value: Option<Value>,
    label: String,
    group: bool,
    disabled: bool,
}

fn resolve<T: OptionSource>(item: &T, opts: &NormalizeOptions<T>) -> Resolved {
    let label = opts
        .hooks
        .label
        .and_then(|f| f(item))
        .or_else(|| item.label().map(ToOwned::to_owned))
        .unwrap_or_default();
    let value = opts
        .hooks
        .value
        .and_then(|f| f(item))
        .or_else(|| item.value())
        .or_else(|| opts.label_as_value.then(|| Value::Text(label.clone())));
    let group = opts.hooks.is_group.map_or_else(|| item.is_group(), |f| f(item));
    Resolved {
        value,
        label,
        group,
        disabled: item.is_disabled(),
    }
}

fn make_leaf<T: Clone>(item: &T, r: Resolved) -> Result<Leaf<T>, NormalizeError> {
    let Some(value) = r.value else {
        return Err(NormalizeError::MissingValue { label: r.label });
    };
    Ok(Leaf {
        value,
        label: r.label,
        disabled: r.disabled,
        data: item.clone(),
    })
}

fn make_group<T: Clone>(item: &T, r: Resolved, children: Vec<Leaf<T>>) -> Group<T> {
    Group {
        value: r.value,
        label: r.label,
        disabled: r.disabled,
        data: item.clone(),
        children,
    }
}

/// Normalize `items` into a canonical [`Tree`].
///
/// The input is only read; every node holds a clone of its source record.
/// Ordering is preserved at every level.
///
/// # Errors
///
/// Returns [`NormalizeError`] when two leaves share a value, a leaf has no
/// value, the input nests deeper than one group level, or a child reference
/// cannot be resolved.
///
/// # Example
///
/// ```
/// use understory_options::{normalize, NormalizeOptions, RawOption, TreeMode, Value};
///
/// let items = vec![
///     RawOption::leaf(1, "A"),
///     RawOption::group("g", "G"),
///     RawOption::leaf(2, "B"),
///     RawOption::leaf(3, "C"),
/// ];
/// let tree = normalize(&items, &NormalizeOptions::new(TreeMode::FlatGroups)).unwrap();
///
/// assert_eq!(tree.len(), 2);
/// let group = tree.group(1).unwrap();
/// assert_eq!(group.value, Some(Value::from("g")));
/// assert_eq!(group.children.len(), 2);
/// ```
pub fn normalize<T: OptionSource>(
    items: &[T],
    opts: &NormalizeOptions<T>,
) -> Result<Tree<T>, NormalizeError> {
    let nodes = match opts.mode {
        TreeMode::FlatGroups => normalize_flat(items, opts)?,
        TreeMode::ParentPointer => normalize_nested(items, opts)?,
        TreeMode::ChildReference => normalize_referenced(items, opts)?,
    };
    let tree = Tree::from_nodes(nodes);
    check_unique(&tree)?;
    tracing::debug!(
        mode = ?opts.mode,
        nodes = tree.len(),
        leaves = tree.leaf_count(),
        "normalized options"
    );
    Ok(tree)
}

fn normalize_flat<T: OptionSource>(
    items: &[T],
    opts: &NormalizeOptions<T>,
) -> Result<Vec<Node<T>>, NormalizeError> {
    let mut out = Vec::new();
    let mut open: Option<Group<T>> = None;

    for item in items {
        let r = resolve(item, opts);
        if r.group {
            if let Some(done) = open.take() {
                out.push(Node::Group(done));
            }
            open = Some(make_group(item, r, Vec::new()));
        } else if let Some(group) = open.as_mut() {
            group.children.push(make_leaf(item, r)?);
        } else {
            out.push(Node::Leaf(make_leaf(item, r)?));
        }
    }

    if let Some(done) = open {
        out.push(Node::Group(done));
    }
    Ok(out)
}

fn normalize_nested<T: OptionSource>(
    items: &[T],
    opts: &NormalizeOptions<T>,
) -> Result<Vec<Node<T>>, NormalizeError> {
    let key = opts.related_key();
    let mut out = Vec::with_capacity(items.len());

    for item in items {
        let r = resolve(item, opts);
        let nested = item.nested(key).unwrap_or_default();
        let mut children = Vec::with_capacity(nested.len());
        for child in nested {
            let rc = resolve(child, opts);
            if child.nested(key).is_some_and(|c| !c.is_empty()) {
                return Err(NormalizeError::NestedGroup { label: rc.label });
            }
            children.push(make_leaf(child, rc)?);
        }
        // The group flag is structural here: only records with children are groups.
        out.push(if children.is_empty() {
            Node::Leaf(make_leaf(item, r)?)
        } else {
            Node::Group(make_group(item, r, children))
        });
    }
    Ok(out)
}

fn normalize_referenced<T: OptionSource>(
    items: &[T],
    opts: &NormalizeOptions<T>,
) -> Result<Vec<Node<T>>, NormalizeError> {
    let key = opts.related_key();
    let resolved: Vec<Resolved> = items.iter().map(|i| resolve(i, opts)).collect();
    let parents: Vec<Option<Value>> = items.iter().map(|i| i.parent(key)).collect();
    let has_children = |value: &Option<Value>| {
        value
            .as_ref()
            .is_some_and(|v| parents.iter().any(|p| p.as_ref() == Some(v)))
    };

    let mut placed = vec![false; items.len()];
    let mut out = Vec::new();

    for (i, item) in items.iter().enumerate() {
        if parents[i].is_some() {
            continue;
        }
        placed[i] = true;
        let mut children = Vec::new();
        if let Some(v) = &resolved[i].value {
            for (j, child) in items.iter().enumerate() {
                if parents[j].as_ref() != Some(v) {
                    continue;
                }
                if has_children(&resolved[j].value) {
                    return Err(NormalizeError::NestedGroup {
                        label: resolved[j].label.clone(),
                    });
                }
                placed[j] = true;
                children.push(make_leaf(child, resolved[j].clone())?);
            }
        }
        let r = resolved[i].clone();
        out.push(if children.is_empty() {
            Node::Leaf(make_leaf(item, r)?)
        } else {
            Node::Group(make_group(item, r, children))
        });
    }

    if let Some(j) = placed.iter().position(|p| !p) {
        if let Some(parent) = parents[j].clone() {
            return Err(NormalizeError::DanglingParent { parent });
        }
    }
    Ok(out)
}

fn check_unique<T>(tree: &Tree<T>) -> Result<(), NormalizeError> {
    let mut seen = BTreeSet::new();
    for leaf in tree.leaves() {
        if !seen.insert(&leaf.value) {
            return Err(NormalizeError::DuplicateValue(leaf.value.clone()));
        }
    }
    Ok(())
}
