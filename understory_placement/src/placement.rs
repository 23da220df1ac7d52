// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel geometry.
//!
//! ## Coordinates
//!
//! The anchor rectangle is given in viewport coordinates, as a layout system
//! reports it for the visible area. Dropdown placements ([`PlacementMode::AutoFit`]
//! and [`PlacementMode::Legacy`]) are returned in document coordinates: the
//! viewport scroll offset is added, so the panel can be positioned absolutely
//! in the page. Modal and sheet placements are viewport-fixed.

use kurbo::{Rect, Size, Vec2};

use crate::length::{Length, MenuWidth, resolve_width};

/// The visible area.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Visible size.
    pub size: Size,
    /// Document scroll offset of the visible area.
    pub scroll: Vec2,
}

impl Viewport {
    /// An unscrolled viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scroll: Vec2::ZERO,
        }
    }

    /// Set the scroll offset.
    #[must_use]
    pub fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll = scroll;
        self
    }

    /// Visible width.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Visible height.
    pub fn height(&self) -> f64 {
        self.size.height
    }
}

/// How the panel is presented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PlacementMode {
    /// Dropdown that flips above the anchor and caps its height to the space available.
    #[default]
    AutoFit,
    /// Dropdown that flips above only when the whole content fits there; never capped.
    Legacy,
    /// Centered dialog.
    FixedModal,
    /// Full-width panel docked to the bottom of the viewport.
    FixedSheet,
}

/// Horizontal positioning of dropdown panels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HorizontalPolicy {
    /// Align with the anchor's left edge, shifting left as needed to stay
    /// inside the viewport, but never past its left edge.
    #[default]
    ClampToViewport,
    /// Always align with the anchor's left edge.
    AnchorLeft,
}

/// Where the panel ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Side {
    /// Under the anchor.
    Below,
    /// Over the anchor.
    Above,
    /// Centered in the viewport.
    Center,
    /// Docked to the bottom of the viewport.
    Bottom,
}

/// Layout parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementConfig {
    /// Presentation mode.
    pub mode: PlacementMode,
    /// Gap between anchor and dropdown. Default 4.
    pub offset: f64,
    /// Dropdown width.
    pub menu_width: MenuWidth,
    /// Two-pane menu; doubles the width.
    pub split_columns: bool,
    /// Cap on the content height; percentages are of the viewport height.
    pub max_height: Option<Length>,
    /// Modal width; percentages are of the viewport width. Default 500px.
    pub modal_width: Length,
    /// Fixed sheet height; the content height when unset.
    pub sheet_height: Option<Length>,
    /// Horizontal positioning of dropdowns.
    pub horizontal: HorizontalPolicy,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            mode: PlacementMode::AutoFit,
            offset: 4.0,
            menu_width: MenuWidth::Auto,
            split_columns: false,
            max_height: None,
            modal_width: Length::Px(500.0),
            sheet_height: None,
            horizontal: HorizontalPolicy::ClampToViewport,
        }
    }
}

impl PlacementConfig {
    /// Default configuration in `mode`.
    pub fn new(mode: PlacementMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the anchor gap.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the dropdown width.
    #[must_use]
    pub fn with_menu_width(mut self, width: impl Into<MenuWidth>) -> Self {
        self.menu_width = width.into();
        self
    }

    /// Enable or disable the two-pane layout.
    #[must_use]
    pub fn with_split_columns(mut self, split: bool) -> Self {
        self.split_columns = split;
        self
    }

    /// Cap the content height.
    #[must_use]
    pub fn with_max_height(mut self, max_height: impl Into<Length>) -> Self {
        self.max_height = Some(max_height.into());
        self
    }

    /// Set the modal width.
    #[must_use]
    pub fn with_modal_width(mut self, width: impl Into<Length>) -> Self {
        self.modal_width = width.into();
        self
    }

    /// Fix the sheet height.
    #[must_use]
    pub fn with_sheet_height(mut self, height: impl Into<Length>) -> Self {
        self.sheet_height = Some(height.into());
        self
    }

    /// Set the horizontal policy.
    #[must_use]
    pub fn with_horizontal(mut self, policy: HorizontalPolicy) -> Self {
        self.horizontal = policy;
        self
    }

    /// Width multiplier: 2 for split columns, else 1.
    pub fn ratio(&self) -> f64 {
        if self.split_columns { 2.0 } else { 1.0 }
    }

    fn max_height_px(&self, viewport: &Viewport) -> Option<f64> {
        self.max_height.as_ref().and_then(|h| h.to_px(viewport.height()))
    }
}

/// Computed panel geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelPlacement {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Width.
    pub width: Length,
    /// Height cap; `None` lets the content decide.
    pub height: Option<f64>,
    /// Chosen side.
    pub side: Side,
}

impl PanelPlacement {
    /// The panel rectangle, when the width is known in pixels.
    ///
    /// Percent widths are resolved against `basis`. The height falls back to
    /// `content_height` when uncapped.
    pub fn rect(&self, basis: f64, content_height: f64) -> Option<Rect> {
        let width = self.width.to_px(basis)?;
        let height = self.height.unwrap_or(content_height);
        Some(Rect::new(self.left, self.top, self.left + width, self.top + height))
    }
}

fn is_degenerate(anchor: Rect) -> bool {
    !anchor.is_finite() || anchor.width() <= 0.0 || anchor.height() <= 0.0
}

/// Compute where the panel goes.
///
/// `anchor` is in viewport coordinates. `content_height` is the measured
/// height of the panel content; negative and NaN values count as zero.
///
/// A zero-area or non-finite anchor never fails: the dropdown falls back to
/// below placement with no height cap.
///
/// ```
/// use kurbo::Rect;
/// use understory_placement::{compute_placement, PlacementConfig, Side, Viewport};
///
/// let anchor = Rect::new(0.0, 450.0, 200.0, 500.0);
/// let p = compute_placement(anchor, Viewport::new(800.0, 600.0), 200.0, &PlacementConfig::default());
/// assert_eq!(p.side, Side::Above);
/// assert_eq!(p.height, Some(200.0));
/// assert_eq!(p.top, 246.0);
/// ```
pub fn compute_placement(
    anchor: Rect,
    viewport: Viewport,
    content_height: f64,
    config: &PlacementConfig,
) -> PanelPlacement {
    let mut content = content_height.max(0.0);
    if let Some(cap) = config.max_height_px(&viewport) {
        content = content.min(cap);
    }

    match config.mode {
        PlacementMode::FixedModal => modal(viewport, content, config),
        PlacementMode::FixedSheet => sheet(viewport, content, config),
        PlacementMode::AutoFit | PlacementMode::Legacy if is_degenerate(anchor) => {
            tracing::debug!(?anchor, "degenerate anchor; placing below without a height cap");
            let (left, bottom, width) = if anchor.is_finite() {
                (anchor.x0, anchor.y1, anchor.width().max(0.0))
            } else {
                (0.0, 0.0, 0.0)
            };
            PanelPlacement {
                top: bottom + config.offset + viewport.scroll.y,
                left: left + viewport.scroll.x,
                width: resolve_width(&config.menu_width, config.ratio(), width),
                height: None,
                side: Side::Below,
            }
        }
        PlacementMode::AutoFit | PlacementMode::Legacy => dropdown(anchor, viewport, content, config),
    }
}

fn dropdown(anchor: Rect, viewport: Viewport, content: f64, config: &PlacementConfig) -> PanelPlacement {
    let offset = config.offset;
    let below_top = anchor.y1 + offset;

    let (top, height, side) = if config.mode == PlacementMode::AutoFit {
        let above = anchor.y0 - offset;
        let below = viewport.height() - anchor.y1 - offset;
        if content <= below {
            (below_top, Some(content.min(below)), Side::Below)
        } else if above > below {
            let height = content.min(above).max(0.0);
            (anchor.y0 - offset - height, Some(height), Side::Above)
        } else {
            (below_top, Some(content.min(below).max(0.0)), Side::Below)
        }
    } else if below_top + content > viewport.height() && content + offset < anchor.y0 {
        (anchor.y0 - offset - content, None, Side::Above)
    } else {
        (below_top, None, Side::Below)
    };

    let width = resolve_width(&config.menu_width, config.ratio(), anchor.width());
    let left = match config.horizontal {
        HorizontalPolicy::AnchorLeft => anchor.x0,
        HorizontalPolicy::ClampToViewport => clamp_left(anchor.x0, &width, viewport.width()),
    };

    PanelPlacement {
        top: top + viewport.scroll.y,
        left: left + viewport.scroll.x,
        width,
        height,
        side,
    }
}

fn clamp_left(left: f64, width: &Length, viewport_width: f64) -> f64 {
    match width.to_px(viewport_width) {
        Some(w) if left + w > viewport_width => (viewport_width - w).max(0.0),
        _ => left,
    }
}

fn modal(viewport: Viewport, content: f64, config: &PlacementConfig) -> PanelPlacement {
    let vw = viewport.width();
    let vh = viewport.height();
    let width = config.modal_width.to_px(vw).unwrap_or(vw).min(vw).max(0.0);
    let height = content.min(config.max_height_px(&viewport).unwrap_or(vh));
    PanelPlacement {
        top: ((vh - height) / 2.0).max(0.0),
        left: (vw - width) / 2.0,
        width: Length::Px(width),
        height: Some(height),
        side: Side::Center,
    }
}

fn sheet(viewport: Viewport, content: f64, config: &PlacementConfig) -> PanelPlacement {
    let vh = viewport.height();
    let wanted = config
        .sheet_height
        .as_ref()
        .and_then(|h| h.to_px(vh))
        .unwrap_or(content);
    let height = wanted.min(config.max_height_px(&viewport).unwrap_or(vh)).max(0.0);
    PanelPlacement {
        top: vh - height,
        left: 0.0,
        width: Length::Px(viewport.width()),
        height: Some(height),
        side: Side::Bottom,
    }
}
