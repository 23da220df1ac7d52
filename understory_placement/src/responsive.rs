// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small-screen detection and presentation switching.

use crate::placement::PlacementMode;

/// Viewport width threshold, in pixels or as a named token.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Breakpoint {
    /// An explicit width.
    Px(f64),
    /// [`Breakpoints::sm`].
    Sm,
    /// [`Breakpoints::md`].
    #[default]
    Md,
    /// [`Breakpoints::lg`].
    Lg,
    /// [`Breakpoints::xl`].
    Xl,
}

/// Widths of the named breakpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    /// Small. Default 640.
    pub sm: f64,
    /// Medium. Default 768.
    pub md: f64,
    /// Large. Default 1024.
    pub lg: f64,
    /// Extra large. Default 1280.
    pub xl: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 640.0,
            md: 768.0,
            lg: 1024.0,
            xl: 1280.0,
        }
    }
}

impl Breakpoint {
    /// Width in pixels under `breakpoints`.
    pub fn resolve(self, breakpoints: &Breakpoints) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Sm => breakpoints.sm,
            Self::Md => breakpoints.md,
            Self::Lg => breakpoints.lg,
            Self::Xl => breakpoints.xl,
        }
    }
}

/// Switches presentation on small screens.
///
/// A viewport is small when its width is at most the breakpoint (the
/// `max-width` media query convention).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Responsive {
    /// Threshold. Defaults to [`Breakpoint::Md`].
    pub breakpoint: Breakpoint,
    /// Named breakpoint widths.
    pub breakpoints: Breakpoints,
    /// Mode on small screens; `None` keeps the regular mode everywhere.
    pub small_screen: Option<PlacementMode>,
}

impl Responsive {
    /// Use `mode` on viewports no wider than `breakpoint`.
    pub fn new(breakpoint: Breakpoint, mode: PlacementMode) -> Self {
        Self {
            breakpoint,
            small_screen: Some(mode),
            ..Self::default()
        }
    }

    /// Override the named breakpoint widths.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Whether a viewport `width` pixels wide counts as small.
    pub fn is_small_screen(&self, width: f64) -> bool {
        width <= self.breakpoint.resolve(&self.breakpoints)
    }

    /// Mode to use at `width`, given the `regular` mode.
    ///
    /// ```
    /// use understory_placement::{Breakpoint, PlacementMode, Responsive};
    ///
    /// let r = Responsive::new(Breakpoint::Sm, PlacementMode::FixedSheet);
    /// assert_eq!(r.mode_for(640.0, PlacementMode::AutoFit), PlacementMode::FixedSheet);
    /// assert_eq!(r.mode_for(641.0, PlacementMode::AutoFit), PlacementMode::AutoFit);
    /// ```
    pub fn mode_for(&self, width: f64, regular: PlacementMode) -> PlacementMode {
        match self.small_screen {
            Some(small) if self.is_small_screen(width) => small,
            _ => regular,
        }
    }
}
