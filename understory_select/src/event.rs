// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications and form submission values.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use understory_options::Value;
use understory_selection::SelectMode;

/// The value carried by a [`ChangeEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EventValue {
    /// Many values (multiple mode), possibly empty.
    Many(Vec<Value>),
    /// One value (single mode).
    One(Value),
    /// Nothing selected (single mode).
    None,
}

/// Emitted after an interactive change of the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeEvent {
    /// The configured field name.
    pub name: Option<String>,
    /// The new value.
    pub value: EventValue,
}

impl ChangeEvent {
    /// Build the event for `selected` in `mode`.
    ///
    /// Single mode reports the first value or [`EventValue::None`]; multiple
    /// mode reports the whole list.
    pub fn new(name: Option<&str>, mode: SelectMode, selected: &[Value]) -> Self {
        let value = match mode {
            SelectMode::Multiple => EventValue::Many(selected.to_vec()),
            SelectMode::Single => selected
                .first()
                .cloned()
                .map_or(EventValue::None, EventValue::One),
        };
        Self {
            name: name.map(ToOwned::to_owned),
            value,
        }
    }
}

/// A hidden form input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Submitted text.
    pub value: String,
}

/// Hidden inputs submitting `selected` under `name`.
///
/// Single mode yields one field (empty when nothing is selected). Multiple
/// mode yields one `name[]` field per value.
pub fn form_fields(name: &str, mode: SelectMode, selected: &[Value]) -> Vec<FormField> {
    match mode {
        SelectMode::Single => alloc::vec![FormField {
            name: name.to_owned(),
            value: selected.first().map(ToString::to_string).unwrap_or_default(),
        }],
        SelectMode::Multiple => {
            let name = if name.ends_with("[]") {
                name.to_owned()
            } else {
                format!("{name}[]")
            };
            selected
                .iter()
                .map(|v| FormField {
                    name: name.clone(),
                    value: v.to_string(),
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn single_events_carry_first_value() {
        let e = ChangeEvent::new(Some("city"), SelectMode::Single, &[Value::from(3)]);
        assert_eq!(e.value, EventValue::One(Value::from(3)));
        assert_eq!(e.name.as_deref(), Some("city"));
        assert_eq!(ChangeEvent::new(None, SelectMode::Single, &[]).value, EventValue::None);
    }

    #[test]
    fn multiple_events_carry_the_list() {
        let e = ChangeEvent::new(None, SelectMode::Multiple, &[]);
        assert_eq!(e.value, EventValue::Many(vec![]));
    }

    #[test]
    fn multiple_fields_use_array_names() {
        let fields = form_fields("tags", SelectMode::Multiple, &[Value::from(1), Value::from("b")]);
        assert_eq!(
            fields,
            [
                FormField { name: "tags[]".into(), value: "1".into() },
                FormField { name: "tags[]".into(), value: "b".into() },
            ]
        );
        assert_eq!(form_fields("tags[]", SelectMode::Multiple, &[Value::from(1)])[0].name, "tags[]");
    }

    #[test]
    fn single_field_is_always_present() {
        let fields = form_fields("city", SelectMode::Single, &[]);
        assert_eq!(fields, [FormField { name: "city".into(), value: String::new() }]);
    }
}
