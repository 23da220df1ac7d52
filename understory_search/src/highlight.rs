// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap match spans in markup.
//!
//! [`highlight`] splices an opening and closing tag around every span and
//! copies the text between spans through verbatim. Text is not escaped:
//! removing the inserted tags yields the original string exactly.
//!
//! The opening tag is assembled from [`HighlightOptions`] in a fixed order:
//! tag name, `class`, `style`, `data-*` attributes, then other attributes.
//! Style properties given as pairs are written in kebab-case, and numbers
//! gain a `px` unit unless the property is unitless (`opacity`, `z-index`,
//! and similar). Custom properties (`--name`) are written as given.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

use crate::matching::{MatchSpan, search_text};

/// CSS properties whose numeric values are written without a unit.
const UNITLESS: &[&str] = &[
    "animation-iteration-count",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-positive",
    "flex-shrink",
    "flex-negative",
    "font-weight",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
    "flood-opacity",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
];

/// A style property value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    /// A length in pixels, unless the property is unitless.
    Number(f64),
    /// Written as given.
    Text(String),
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Inline style for the highlight tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Style {
    /// A raw declaration list such as `"font-weight:bold;"`.
    Inline(String),
    /// Property/value pairs; keys may be camelCase.
    Properties(Vec<(String, StyleValue)>),
}

impl Default for Style {
    fn default() -> Self {
        Self::Properties(Vec::new())
    }
}

/// Markup options for [`highlight`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightOptions {
    /// Tag name. Defaults to `span`.
    pub tag: String,
    /// Value of the `class` attribute; omitted when empty.
    pub class_name: String,
    /// Inline style.
    pub style: Style,
    /// `data-*` attributes, keys without the prefix.
    pub dataset: Vec<(String, String)>,
    /// Other attributes.
    pub attrs: Vec<(String, String)>,
    /// Text color appended to the style as `color:<value>;`.
    pub color: Option<String>,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            tag: "span".to_owned(),
            class_name: String::new(),
            style: Style::default(),
            dataset: Vec::new(),
            attrs: Vec::new(),
            color: None,
        }
    }
}

impl HighlightOptions {
    /// Default options: a bare `<span>`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag name.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Use a raw inline style, replacing any properties.
    #[must_use]
    pub fn style_inline(mut self, style: impl Into<String>) -> Self {
        self.style = Style::Inline(style.into());
        self
    }

    /// Append a style property, replacing a raw inline style.
    #[must_use]
    pub fn style_property(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let entry = (key.into(), value.into());
        match &mut self.style {
            Style::Properties(props) => props.push(entry),
            Style::Inline(_) => self.style = Style::Properties(alloc::vec![entry]),
        }
        self
    }

    /// Append a `data-*` attribute.
    #[must_use]
    pub fn data(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.dataset.push((key.into(), value.to_string()));
        self
    }

    /// Append an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.attrs.push((key.into(), value.to_string()));
        self
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn style_text(&self) -> String {
        StyleText(self).to_string()
    }

    /// The opening tag, including angle brackets.
    pub fn open_tag(&self) -> String {
        OpenTag(self).to_string()
    }

    /// The closing tag.
    pub fn close_tag(&self) -> String {
        let mut out = String::from("</");
        out.push_str(&self.tag);
        out.push('>');
        out
    }
}

/// Inline CSS for the configured style and color.
struct StyleText<'a>(&'a HighlightOptions);

impl Display for StyleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.0;
        let mut unterminated = false;
        match &options.style {
            Style::Inline(raw) => {
                f.write_str(raw)?;
                unterminated = !raw.is_empty() && !raw.ends_with(';');
            }
            Style::Properties(props) => {
                for (key, value) in props {
                    let key = kebab_case(key);
                    match value {
                        StyleValue::Number(n) if !UNITLESS.contains(&key.as_str()) => {
                            write!(f, "{key}:{n}px;")?;
                        }
                        StyleValue::Number(n) => write!(f, "{key}:{n};")?,
                        StyleValue::Text(t) => write!(f, "{key}:{t};")?,
                    }
                }
            }
        }
        if let Some(color) = &options.color {
            if unterminated {
                f.write_char(';')?;
            }
            write!(f, "color:{color};")?;
        }
        Ok(())
    }
}

struct OpenTag<'a>(&'a HighlightOptions);

impl Display for OpenTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.0;
        write!(f, "<{}", options.tag)?;
        if !options.class_name.is_empty() {
            write!(f, " class=\"{}\"", options.class_name)?;
        }
        let style = options.style_text();
        if !style.is_empty() {
            write!(f, " style=\"{style}\"")?;
        }
        for (key, value) in &options.dataset {
            write!(f, " data-{key}=\"{}\"", escape_quotes(value))?;
        }
        for (key, value) in &options.attrs {
            write!(f, " {key}=\"{}\"", escape_quotes(value))?;
        }
        f.write_char('>')
    }
}

fn kebab_case(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_owned();
    }
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn escape_quotes(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Wrap each span of `original` in the configured tag.
///
/// Spans must be sorted and non-overlapping, as [`search_text`] returns them.
/// Spans that are out of order, out of bounds, or not on `char` boundaries
/// are skipped. With no usable spans the original text is returned as is.
pub fn highlight(original: &str, spans: &[MatchSpan], options: &HighlightOptions) -> String {
    if spans.is_empty() {
        return original.to_owned();
    }
    let open = options.open_tag();
    let close = options.close_tag();

    let mut out = String::with_capacity(original.len() + spans.len() * (open.len() + close.len()));
    let mut last = 0;
    for span in spans {
        if span.start < last {
            continue;
        }
        let (Some(before), Some(matched)) = (original.get(last..span.start), original.get(span.range()))
        else {
            continue;
        };
        out.push_str(before);
        out.push_str(&open);
        out.push_str(matched);
        out.push_str(&close);
        last = span.end;
    }
    out.push_str(&original[last..]);
    out
}

/// Search `original` for `query` and highlight every match.
///
/// ```
/// use understory_search::{highlight_query, HighlightOptions};
///
/// let options = HighlightOptions::new().tag("mark").class_name("hit");
/// assert_eq!(
///     highlight_query("José García", "garcia", &options),
///     "José <mark class=\"hit\">García</mark>",
/// );
/// ```
pub fn highlight_query(original: &str, query: &str, options: &HighlightOptions) -> String {
    let spans = search_text(original, query);
    highlight(original, &spans, options)
}
