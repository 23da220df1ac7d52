// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_search --heading-base-level=0

//! Understory Search: forgiving option search for headless select widgets.
//!
//! ## Overview
//!
//! Users type `jose` and expect to find `José`. This crate compares text after
//! folding case and diacritics, but reports results against the text as the
//! user sees it, so the UI can highlight exactly the characters that matched.
//!
//! - [`normalize_text`] / [`slugify`]: the folding transform.
//! - [`search_text`]: every non-overlapping occurrence of a query, as
//!   [`MatchSpan`]s carrying byte offsets into the original string.
//! - [`highlight`] / [`highlight_query`]: splice markup around spans, configured
//!   with [`HighlightOptions`].
//! - [`filter_tree`]: narrow an [`understory_options::Tree`] with a pluggable
//!   [`Matcher`] ([`FoldedMatcher`], [`ContainsMatcher`], or any closure).
//!
//! ## Folding
//!
//! Text is lowercased, canonically decomposed with combining marks removed, and
//! reduced to word characters. Whitespace and hyphens separate words; other
//! symbols vanish. `Đà Nẵng!` folds to `da nang`.
//!
//! # Example
//!
//! ```rust
//! use understory_search::{highlight_query, search_text, HighlightOptions};
//!
//! let label = "Crème Brûlée";
//! let spans = search_text(label, "brulee");
//! assert_eq!(&label[spans[0].range()], "Brûlée");
//!
//! let html = highlight_query(label, "brulee", &HighlightOptions::new().tag("mark"));
//! assert_eq!(html, "Crème <mark>Brûlée</mark>");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod filter;
pub mod fold;
pub mod highlight;
pub mod matching;

pub use filter::{ContainsMatcher, FilterOptions, FoldedMatcher, Matcher, filter_tree};
pub use fold::{fold_char, normalize_text, slugify};
pub use highlight::{HighlightOptions, Style, StyleValue, highlight, highlight_query};
pub use matching::{MatchSpan, search_text};
