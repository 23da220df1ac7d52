// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors detected during normalization.

use alloc::string::String;

use crate::value::Value;

/// Why an option collection could not be normalized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Two leaves resolved to the same value.
    #[error("duplicate option value `{0}`")]
    DuplicateValue(Value),

    /// A leaf resolved to no value and label fallback is disabled.
    #[error("option `{label}` has no value")]
    MissingValue {
        /// Label of the offending option.
        label: String,
    },

    /// An option would become a group inside a group.
    #[error("option `{label}` has children but is itself a child; groups nest one level deep")]
    NestedGroup {
        /// Label of the offending option.
        label: String,
    },

    /// A child reference names no top-level option.
    #[error("parent `{parent}` does not match any top-level option")]
    DanglingParent {
        /// The unresolved parent reference.
        parent: Value,
    },
}
