// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: where to put a select panel.
//!
//! ## Overview
//!
//! [`compute_placement`] is a pure function from plain geometry to a panel
//! position. The host samples the anchor rectangle, the [`Viewport`], and the
//! measured content height, and applies the returned [`PanelPlacement`]. No
//! layout system is consulted, so every case can be unit tested.
//!
//! Four presentations are supported, chosen with [`PlacementMode`]:
//!
//! - [`PlacementMode::AutoFit`]: a dropdown under the anchor that flips above
//!   when there is more room there, capping its height to the space available.
//! - [`PlacementMode::Legacy`]: a dropdown that flips above only when the whole
//!   content fits there, and never caps its height.
//! - [`PlacementMode::FixedModal`]: a centered dialog.
//! - [`PlacementMode::FixedSheet`]: a full-width panel docked to the bottom.
//!
//! [`Responsive`] switches to a modal or sheet on small screens, and
//! [`PendingRecompute`] tracks the [`RecomputeTrigger`]s after which the
//! placement must be recomputed.
//!
//! Widths are [`Length`]s: pixel and percent values are multiplied by 2 for
//! split-column menus; unrecognized expressions pass through for the host to
//! interpret.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use understory_placement::{compute_placement, Length, PlacementConfig, Side, Viewport};
//!
//! // An anchor near the bottom of the window, with the page scrolled down.
//! let anchor = Rect::new(20.0, 450.0, 220.0, 500.0);
//! let viewport = Viewport::new(800.0, 600.0).with_scroll(Vec2::new(0.0, 1200.0));
//! let config = PlacementConfig::default().with_menu_width(260.0);
//!
//! let p = compute_placement(anchor, viewport, 320.0, &config);
//! assert_eq!(p.side, Side::Above);
//! assert_eq!(p.width, Length::Px(260.0));
//! assert_eq!(p.height, Some(320.0));
//! assert_eq!(p.top, 1200.0 + 450.0 - 4.0 - 320.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod length;
pub mod placement;
pub mod responsive;
pub mod trigger;

pub use length::{Length, MenuWidth, resolve_width};
pub use placement::{
    HorizontalPolicy, PanelPlacement, PlacementConfig, PlacementMode, Side, Viewport, compute_placement,
};
pub use responsive::{Breakpoint, Breakpoints, Responsive};
pub use trigger::{PendingRecompute, RecomputeTrigger};
