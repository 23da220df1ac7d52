// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option identifiers.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Primitive identifier of a selectable option.
///
/// Values are compared structurally: `Value::Int(1)` and `Value::Text("1")` are
/// different identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Integer identifier.
    Int(i64),
    /// Text identifier.
    Text(String),
}

impl Value {
    /// Whether this value carries no identity (an empty text).
    ///
    /// Blank values are ignored by set comparisons of selections.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Whether this value reads as "nothing" in an external selection: a blank
    /// text or the integer zero.
    ///
    /// Zero is still a valid option value; this only drives the comparison
    /// of externally supplied selections.
    pub fn is_falsy(&self) -> bool {
        self.is_blank() || *self == Self::Int(0)
    }

    /// The text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// The integer payload, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// An externally supplied selection in any of its accepted shapes.
///
/// Hosts pass `None` for "no value", a single value for single selects, or a
/// list for multiple selects. [`ValueInput::into_values`] flattens all three
/// into the list form the selection engine works with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ValueInput {
    /// No value supplied.
    #[default]
    None,
    /// A single value.
    One(Value),
    /// A list of values.
    Many(Vec<Value>),
}

impl ValueInput {
    /// Flatten into a list of values.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::None => Vec::new(),
            Self::One(v) => vec![v],
            Self::Many(vs) => vs,
        }
    }
}

impl From<Value> for ValueInput {
    fn from(v: Value) -> Self {
        Self::One(v)
    }
}

impl From<Vec<Value>> for ValueInput {
    fn from(vs: Vec<Value>) -> Self {
        Self::Many(vs)
    }
}

impl From<Option<Value>> for ValueInput {
    fn from(v: Option<Value>) -> Self {
        v.map_or(Self::None, Self::One)
    }
}
