// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use alloc::string::String;

use understory_options::{NormalizeOptions, TreeMode};
use understory_placement::{PlacementConfig, Responsive};
use understory_search::{FilterOptions, HighlightOptions};
use understory_selection::SelectMode;

/// Where the search input lives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SearchPosition {
    /// Replaces the value display while the panel is open.
    #[default]
    Anchor,
    /// At the top of the panel.
    Dropdown,
}

/// How labels are compared with the search term.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MatchKind {
    /// Case and diacritic insensitive.
    #[default]
    Folded,
    /// Lowercase substring.
    Contains,
}

/// Search settings.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Whether the select is searchable.
    pub enabled: bool,
    /// Where the input is shown.
    pub position: SearchPosition,
    /// Label matching.
    pub matching: MatchKind,
    /// Tree filtering.
    pub filter: FilterOptions,
    /// Markup for matched label text.
    pub highlight: HighlightOptions,
}

/// Everything a [`Select`](crate::Select) needs besides its options.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectConfig {
    /// Single or multiple selection.
    pub mode: SelectMode,
    /// Interactive selection cap; `<= 0` is unlimited.
    pub max_select: i64,
    /// Shape of the option input.
    pub tree_mode: TreeMode,
    /// Relation key override for nested and referencing inputs.
    pub related_key: Option<String>,
    /// Use labels as values for options without one.
    pub label_as_value: bool,
    /// Search settings.
    pub search: SearchConfig,
    /// Keep the panel open after a multiple-mode toggle. Default `true`.
    pub keep_on_select: bool,
    /// Show a fully selected group as one entry.
    pub group_collapse: bool,
    /// Show at most this many entries, then a remaining count; `0` shows all.
    pub display_count: usize,
    /// Form field name; no fields are produced without one.
    pub name: Option<String>,
    /// Text shown when nothing is selected.
    pub placeholder: String,
    /// Panel geometry.
    pub placement: PlacementConfig,
    /// Small-screen presentation.
    pub responsive: Responsive,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            mode: SelectMode::Single,
            max_select: 0,
            tree_mode: TreeMode::FlatGroups,
            related_key: None,
            label_as_value: false,
            search: SearchConfig::default(),
            keep_on_select: true,
            group_collapse: false,
            display_count: 0,
            name: None,
            placeholder: String::new(),
            placement: PlacementConfig::default(),
            responsive: Responsive::default(),
        }
    }
}

impl SelectConfig {
    /// Single-selection defaults.
    pub fn single() -> Self {
        Self::default()
    }

    /// Multiple-selection defaults.
    pub fn multiple() -> Self {
        Self {
            mode: SelectMode::Multiple,
            ..Self::default()
        }
    }

    /// Cap interactive selection.
    #[must_use]
    pub fn with_max_select(mut self, max_select: i64) -> Self {
        self.max_select = max_select;
        self
    }

    /// Set the input shape.
    #[must_use]
    pub fn with_tree_mode(mut self, mode: TreeMode) -> Self {
        self.tree_mode = mode;
        self
    }

    /// Enable search at `position`.
    #[must_use]
    pub fn searchable(mut self, position: SearchPosition) -> Self {
        self.search.enabled = true;
        self.search.position = position;
        self
    }

    /// Choose how labels match the search term.
    #[must_use]
    pub fn with_matching(mut self, matching: MatchKind) -> Self {
        self.search.matching = matching;
        self
    }

    /// Set whether the panel stays open after a multiple-mode toggle.
    #[must_use]
    pub fn keep_on_select(mut self, keep: bool) -> Self {
        self.keep_on_select = keep;
        self
    }

    /// Collapse fully selected groups in the value display.
    #[must_use]
    pub fn with_group_collapse(mut self, collapse: bool) -> Self {
        self.group_collapse = collapse;
        self
    }

    /// Limit the value display.
    #[must_use]
    pub fn with_display_count(mut self, count: usize) -> Self {
        self.display_count = count;
        self
    }

    /// Set the form field name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the panel geometry.
    #[must_use]
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    /// Set the small-screen presentation.
    #[must_use]
    pub fn with_responsive(mut self, responsive: Responsive) -> Self {
        self.responsive = responsive;
        self
    }

    /// Normalization settings derived from this configuration, without hooks.
    pub fn normalize_options<T>(&self) -> NormalizeOptions<T> {
        NormalizeOptions {
            mode: self.tree_mode,
            related_key: self.related_key.clone(),
            label_as_value: self.label_as_value,
            ..NormalizeOptions::default()
        }
    }
}
