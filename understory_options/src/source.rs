// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input side of normalization: the [`OptionSource`] trait and the dynamic [`RawOption`] record.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::value::Value;

/// Read access to a caller-supplied option record.
///
/// The normalizer only ever reads through this trait and clones the record
/// into the canonical tree, so caller data is never mutated.
///
/// `key` arguments carry the configured relation key (see
/// [`NormalizeOptions::related_key`](crate::NormalizeOptions::related_key)).
pub trait OptionSource: Clone {
    /// Structural value of the record, if any.
    fn value(&self) -> Option<Value>;

    /// Structural label of the record, if any.
    fn label(&self) -> Option<&str>;

    /// Structural group marker.
    fn is_group(&self) -> bool {
        false
    }

    /// Whether the record is disabled.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Nested child records stored under `key` (parent-pointer inputs).
    fn nested(&self, _key: &str) -> Option<&[Self]> {
        None
    }

    /// Parent value stored under `key` (child-reference inputs).
    fn parent(&self, _key: &str) -> Option<Value> {
        None
    }
}

/// A dynamic option record.
///
/// Mirrors the loosely shaped objects select widgets are usually fed: a value,
/// a label, a couple of flags, arbitrary scalar attributes, and nested
/// collections stored under named keys.
///
/// ```
/// use understory_options::{RawOption, Value};
///
/// let fruit = RawOption::leaf(1, "Apple").with_attr("parent", "fruits");
/// assert_eq!(fruit.attrs.get("parent"), Some(&Value::from("fruits")));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawOption {
    /// Identifier.
    pub value: Option<Value>,
    /// Display label.
    pub label: Option<String>,
    /// Group marker (flat inputs).
    pub group: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Scalar attributes, including parent references.
    pub attrs: BTreeMap<String, Value>,
    /// Nested collections by key.
    pub nested: BTreeMap<String, Vec<Self>>,
}

impl RawOption {
    /// A plain selectable option.
    pub fn leaf(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// A group marker with an identifier.
    pub fn group(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: Some(label.into()),
            group: true,
            ..Default::default()
        }
    }

    /// A record with only a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Mark the record disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set a scalar attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Store a nested collection under `key`.
    #[must_use]
    pub fn with_nested(mut self, key: impl Into<String>, items: Vec<Self>) -> Self {
        self.nested.insert(key.into(), items);
        self
    }
}

impl OptionSource for RawOption {
    fn value(&self) -> Option<Value> {
        self.value.clone()
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn is_group(&self) -> bool {
        self.group
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn nested(&self, key: &str) -> Option<&[Self]> {
        self.nested.get(key).map(Vec::as_slice)
    }

    fn parent(&self, key: &str) -> Option<Value> {
        self.attrs.get(key).filter(|v| !v.is_blank()).cloned()
    }
}
