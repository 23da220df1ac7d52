// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS-like lengths used for panel sizes.

use alloc::string::String;
use core::fmt;

/// A panel dimension.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Length {
    /// Device-independent pixels.
    Px(f64),
    /// Percentage of the containing dimension.
    Percent(f64),
    /// An expression the engine cannot evaluate (`calc(..)`, `20rem`, ...);
    /// passed through to the host untouched.
    Raw(String),
}

impl Length {
    /// Parse a textual length.
    ///
    /// `"Npx"` and `"N%"` become [`Px`](Self::Px) and [`Percent`](Self::Percent);
    /// a bare number is pixels; anything else is [`Raw`](Self::Raw).
    ///
    /// ```
    /// use understory_placement::Length;
    ///
    /// assert_eq!(Length::parse("120px"), Length::Px(120.0));
    /// assert_eq!(Length::parse(" 50% "), Length::Percent(50.0));
    /// assert_eq!(Length::parse("12.5"), Length::Px(12.5));
    /// assert_eq!(Length::parse("20rem"), Length::Raw("20rem".into()));
    /// ```
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        let parsed = if let Some(n) = t.strip_suffix("px") {
            n.trim().parse().ok().map(Self::Px)
        } else if let Some(n) = t.strip_suffix('%') {
            n.trim().parse().ok().map(Self::Percent)
        } else {
            t.parse().ok().map(Self::Px)
        };
        parsed
            .filter(Self::is_finite)
            .unwrap_or_else(|| Self::Raw(String::from(text)))
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v.is_finite(),
            Self::Raw(_) => true,
        }
    }

    /// Multiply a numeric length by `ratio`. Raw lengths are returned as is.
    #[must_use]
    pub fn scale(&self, ratio: f64) -> Self {
        match self {
            Self::Px(v) => Self::Px(v * ratio),
            Self::Percent(v) => Self::Percent(v * ratio),
            Self::Raw(s) => Self::Raw(s.clone()),
        }
    }

    /// Evaluate in pixels against a containing dimension of `basis` pixels.
    ///
    /// Returns `None` for raw lengths.
    pub fn to_px(&self, basis: f64) -> Option<f64> {
        match self {
            Self::Px(v) => Some(*v),
            Self::Percent(p) => Some(basis * p / 100.0),
            Self::Raw(_) => None,
        }
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for Length {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

/// Requested menu width.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MenuWidth {
    /// Match the anchor.
    #[default]
    Auto,
    /// An explicit length.
    Fixed(Length),
}

impl From<f64> for MenuWidth {
    fn from(px: f64) -> Self {
        Self::Fixed(Length::Px(px))
    }
}

impl From<&str> for MenuWidth {
    fn from(text: &str) -> Self {
        if text.trim() == "auto" {
            Self::Auto
        } else {
            Self::Fixed(Length::parse(text))
        }
    }
}

/// Resolve the panel width.
///
/// `ratio` is 2 for split-column menus and 1 otherwise. Pixel and percent
/// widths are scaled by it, [`MenuWidth::Auto`] becomes the anchor width times
/// `ratio`, and raw lengths pass through unscaled.
///
/// ```
/// use understory_placement::{resolve_width, Length, MenuWidth};
///
/// assert_eq!(resolve_width(&MenuWidth::from(150.0), 2.0, 80.0), Length::Px(300.0));
/// assert_eq!(resolve_width(&MenuWidth::from("40%"), 2.0, 80.0), Length::Percent(80.0));
/// assert_eq!(resolve_width(&MenuWidth::Auto, 2.0, 80.0), Length::Px(160.0));
/// ```
pub fn resolve_width(menu_width: &MenuWidth, ratio: f64, anchor_width: f64) -> Length {
    match menu_width {
        MenuWidth::Auto => Length::Px(anchor_width * ratio),
        MenuWidth::Fixed(len) => len.scale(ratio),
    }
}
