// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Select`] controller.
//!
//! ## Lifecycle
//!
//! - The option tree is built at construction and rebuilt by
//!   [`Select::set_options`]. A rebuild that fails leaves the previous tree in
//!   place.
//! - The selection starts from [`Select::with_value`] and changes through
//!   clicks, chip removal, and clearing, each of which returns a
//!   [`ChangeEvent`] for the host to forward.
//! - [`Select::sync_value`] applies an externally controlled value. It never
//!   produces an event.
//! - Closing the panel discards the search term.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use understory_options::{NormalizeError, NormalizeOptions, OptionSource, Tree, Value, ValueInput, normalize};
use understory_placement::{
    PanelPlacement, PendingRecompute, PlacementMode, RecomputeTrigger, Viewport, compute_placement,
};
use understory_search::{ContainsMatcher, FoldedMatcher, MatchSpan, filter_tree, highlight, search_text};
use understory_selection::{CheckState, SelectMode, SelectionStore};

use crate::config::{MatchKind, SearchPosition, SelectConfig};
use crate::display::{DisplayValue, display_value};
use crate::event::{ChangeEvent, FormField, form_fields};

/// What a click landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The option with this value, top-level or inside a group.
    Leaf(Value),
    /// The top-level node at this index, which must be a group.
    Group(usize),
}

/// What the anchor shows.
#[derive(Clone, Debug)]
pub enum AnchorContent<'a, T> {
    /// Nothing selected.
    Placeholder(&'a str),
    /// The search input, holding the current term.
    SearchInput(&'a str),
    /// The selected entries.
    Values(DisplayValue<'a, T>),
}

/// A headless select widget.
#[derive(Clone, Debug)]
pub struct Select<T: OptionSource = understory_options::RawOption> {
    config: SelectConfig,
    normalize: NormalizeOptions<T>,
    tree: Tree<T>,
    store: SelectionStore,
    open: bool,
    search_term: String,
    filtering: bool,
    recompute: PendingRecompute,
}

impl<T: OptionSource> Select<T> {
    /// Build a select over `items`.
    pub fn new(items: &[T], config: SelectConfig) -> Result<Self, NormalizeError> {
        let normalize = config.normalize_options();
        Self::with_normalize_options(items, config, normalize)
    }

    /// Build a select with explicit normalization settings, including hooks.
    ///
    /// The tree mode, relation key, and label fallback of `normalize` take
    /// precedence over the ones in `config`.
    pub fn with_normalize_options(
        items: &[T],
        config: SelectConfig,
        normalize: NormalizeOptions<T>,
    ) -> Result<Self, NormalizeError> {
        let tree = understory_options::normalize(items, &normalize)?;
        let store = SelectionStore::new(config.mode, config.max_select, ValueInput::None);
        Ok(Self {
            config,
            normalize,
            tree,
            store,
            open: false,
            search_term: String::new(),
            filtering: false,
            recompute: PendingRecompute::new(),
        })
    }

    /// Set the initial selection. Not subject to `max_select`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<ValueInput>) -> Self {
        self.store.set_value(value);
        self
    }

    /// Rebuild the tree from new options. The selection is kept as is.
    pub fn set_options(&mut self, items: &[T]) -> Result<(), NormalizeError> {
        self.tree = normalize(items, &self.normalize)?;
        self.recompute.record(RecomputeTrigger::CONTENT_RESIZE);
        Ok(())
    }

    /// The configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The full option tree.
    pub fn tree(&self) -> &Tree<T> {
        &self.tree
    }

    /// Selected values.
    pub fn selected(&self) -> &[Value] {
        self.store.selected()
    }

    /// Whether `value` is selected.
    pub fn is_selected(&self, value: &Value) -> bool {
        self.store.is_selected(value)
    }

    /// Checkbox state of the top-level group at `index`.
    pub fn group_check_state(&self, index: usize) -> Option<CheckState> {
        self.tree
            .group(index)
            .map(|g| self.store.group_status(g).check_state())
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Whether the search term currently filters the options.
    pub fn is_filtering(&self) -> bool {
        self.filtering && !self.search_term.trim().is_empty()
    }

    /// Open the panel.
    ///
    /// A searchable single select starts with the current value's label as
    /// search term, without filtering, so the user can edit it.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.recompute.open();

        let prefill = self.config.search.enabled
            && self.config.mode == SelectMode::Single
            && self.search_term.is_empty();
        if prefill {
            let label = self
                .store
                .selected()
                .first()
                .and_then(|v| self.tree.find_leaf(v))
                .map(|leaf| leaf.label.clone());
            if let Some(label) = label {
                self.search_term = label;
                self.filtering = false;
            }
        }
        tracing::debug!(prefilled = !self.search_term.is_empty(), "select opened");
    }

    /// Close the panel, discarding the search term.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.search_term.clear();
        self.filtering = false;
        self.recompute.close();
        tracing::debug!("select closed");
    }

    /// Update the search term; filtering starts with the first edit.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.filtering = true;
        self.recompute.record(RecomputeTrigger::CONTENT_RESIZE);
    }

    /// The options to show: filtered while the user is searching.
    pub fn visible_tree(&self) -> Cow<'_, Tree<T>> {
        if !self.is_filtering() {
            return Cow::Borrowed(&self.tree);
        }
        let filter = &self.config.search.filter;
        let term = self.search_term.as_str();
        Cow::Owned(match self.config.search.matching {
            MatchKind::Folded => filter_tree(&self.tree, term, &FoldedMatcher, filter),
            MatchKind::Contains => filter_tree(&self.tree, term, &ContainsMatcher, filter),
        })
    }

    /// Matches of the search term in `label`; empty when not filtering.
    pub fn label_matches(&self, label: &str) -> Vec<MatchSpan> {
        if self.is_filtering() {
            search_text(label, &self.search_term)
        } else {
            Vec::new()
        }
    }

    /// `label` with the search matches wrapped in the configured markup.
    pub fn highlighted_label(&self, label: &str) -> String {
        highlight(label, &self.label_matches(label), &self.config.search.highlight)
    }

    /// Apply a click.
    ///
    /// Returns the change to report, or `None` when the click was ignored:
    /// disabled targets, unknown targets, and groups in single mode.
    pub fn click(&mut self, target: &Target) -> Option<ChangeEvent> {
        let applied = match target {
            Target::Leaf(value) => match self.tree.find_leaf(value) {
                Some(leaf) => self.store.toggle_leaf(leaf).is_some(),
                None => {
                    tracing::trace!(%value, "click on unknown option");
                    false
                }
            },
            Target::Group(index) => match self.tree.group(*index) {
                Some(group) => self.store.toggle_group(group).is_some(),
                None => {
                    tracing::trace!(index, "click on a missing group");
                    false
                }
            },
        };
        if !applied {
            return None;
        }

        let event = self.change_event();
        match self.config.mode {
            SelectMode::Single => self.close(),
            SelectMode::Multiple if !self.config.keep_on_select => self.close(),
            SelectMode::Multiple => self.recompute.record(RecomputeTrigger::ANCHOR_RESIZE),
        }
        Some(event)
    }

    /// Remove one value, as a chip's remove button does.
    pub fn remove(&mut self, value: &Value) -> Option<ChangeEvent> {
        self.store.remove(value).then(|| self.change_event())
    }

    /// Deselect everything.
    pub fn clear(&mut self) -> Option<ChangeEvent> {
        self.store.clear().then(|| self.change_event())
    }

    /// Apply an externally controlled value.
    ///
    /// The selection is replaced when the value is not set-equal to it.
    /// Returns whether it was replaced.
    pub fn sync_value(&mut self, external: impl Into<ValueInput>) -> bool {
        self.store.sync_external(external)
    }

    fn change_event(&self) -> ChangeEvent {
        ChangeEvent::new(self.config.name.as_deref(), self.config.mode, self.store.selected())
    }

    /// Selected entries for the value display.
    pub fn display_value(&self) -> DisplayValue<'_, T> {
        display_value(
            &self.tree,
            self.store.selected(),
            self.config.group_collapse,
            self.config.display_count,
        )
    }

    /// What the anchor shows right now.
    pub fn anchor_content(&self) -> AnchorContent<'_, T> {
        let search = &self.config.search;
        if search.enabled && search.position == SearchPosition::Anchor && self.open {
            return AnchorContent::SearchInput(&self.search_term);
        }
        let display = self.display_value();
        if display.is_empty() {
            AnchorContent::Placeholder(&self.config.placeholder)
        } else {
            AnchorContent::Values(display)
        }
    }

    /// Hidden inputs for form submission; empty without a configured name.
    pub fn form_fields(&self) -> Vec<FormField> {
        match &self.config.name {
            Some(name) => form_fields(name, self.config.mode, self.store.selected()),
            None => Vec::new(),
        }
    }

    /// The presentation mode for `viewport`.
    pub fn placement_mode(&self, viewport: &Viewport) -> PlacementMode {
        self.config
            .responsive
            .mode_for(viewport.width(), self.config.placement.mode)
    }

    /// Where the panel goes.
    pub fn placement(&self, anchor: Rect, viewport: Viewport, content_height: f64) -> PanelPlacement {
        let mode = self.placement_mode(&viewport);
        let placement = if mode == self.config.placement.mode {
            compute_placement(anchor, viewport, content_height, &self.config.placement)
        } else {
            let mut config = self.config.placement.clone();
            config.mode = mode;
            compute_placement(anchor, viewport, content_height, &config)
        };
        tracing::debug!(?mode, side = ?placement.side, top = placement.top, "placed panel");
        placement
    }

    /// Record an event that invalidates the placement. Ignored while closed.
    pub fn record_trigger(&mut self, trigger: RecomputeTrigger) {
        self.recompute.record(trigger);
    }

    /// Take the triggers recorded since the last placement, if any.
    pub fn take_recompute(&mut self) -> Option<RecomputeTrigger> {
        self.recompute.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_options::RawOption;

    use crate::display::DisplayEntry;
    use crate::event::EventValue;

    fn items() -> Vec<RawOption> {
        vec![
            RawOption::leaf(1, "Lisboa"),
            RawOption::group("fr", "France"),
            RawOption::leaf(2, "Paris"),
            RawOption::leaf(3, "Nîmes"),
            RawOption::leaf(4, "Orléans").disabled(),
        ]
    }

    #[test]
    fn single_click_replaces_and_closes() {
        let mut s = Select::new(&items(), SelectConfig::single().with_name("city")).unwrap();
        s.open();
        let event = s.click(&Target::Leaf(Value::from(3))).unwrap();
        assert_eq!(event.value, EventValue::One(Value::from(3)));
        assert!(!s.is_open());
        assert_eq!(s.click(&Target::Group(1)), None);
        assert_eq!(s.click(&Target::Leaf(Value::from(4))), None);
        assert_eq!(s.click(&Target::Leaf(Value::from(99))), None);
        assert_eq!(s.selected(), &[Value::from(3)]);
    }

    #[test]
    fn multiple_group_click_cascades_over_enabled_children() {
        let mut s = Select::new(&items(), SelectConfig::multiple()).unwrap();
        s.open();
        let event = s.click(&Target::Group(1)).unwrap();
        assert_eq!(event.value, EventValue::Many(vec![Value::from(2), Value::from(3)]));
        assert!(s.is_open());
        assert_eq!(s.group_check_state(1), Some(CheckState::Mixed));
        assert_eq!(s.group_check_state(0), None);
    }

    #[test]
    fn keep_on_select_false_closes_after_toggle() {
        let mut s = Select::new(&items(), SelectConfig::multiple().keep_on_select(false)).unwrap();
        s.open();
        s.click(&Target::Leaf(Value::from(1)));
        assert!(!s.is_open());
    }

    #[test]
    fn open_prefills_single_search_without_filtering() {
        let config = SelectConfig::single().searchable(SearchPosition::Anchor);
        let mut s = Select::new(&items(), config).unwrap().with_value(Value::from(2));
        s.open();
        assert_eq!(s.search_term(), "Paris");
        assert!(!s.is_filtering());
        assert_eq!(s.visible_tree().len(), 2);
        assert!(matches!(s.anchor_content(), AnchorContent::SearchInput("Paris")));

        s.set_search_term("nimes");
        let visible = s.visible_tree();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.group(0).unwrap().children.len(), 3);

        s.close();
        assert_eq!(s.search_term(), "");
        assert_eq!(s.visible_tree().len(), 2);
    }

    #[test]
    fn highlight_follows_search_term() {
        let config = SelectConfig::multiple().searchable(SearchPosition::Dropdown);
        let mut s = Select::new(&items(), config).unwrap();
        s.open();
        assert_eq!(s.highlighted_label("Nîmes"), "Nîmes");
        s.set_search_term("nim");
        assert_eq!(s.highlighted_label("Nîmes"), "<span>Nîm</span>es");
    }

    #[test]
    fn anchor_shows_placeholder_then_values() {
        let config = SelectConfig::multiple().with_placeholder("Pick").with_display_count(1);
        let mut s = Select::new(&items(), config).unwrap();
        assert!(matches!(s.anchor_content(), AnchorContent::Placeholder("Pick")));

        s.click(&Target::Leaf(Value::from(3)));
        s.click(&Target::Leaf(Value::from(1)));
        let AnchorContent::Values(d) = s.anchor_content() else {
            panic!("expected values");
        };
        assert_eq!(d.remaining, 1);
        assert!(matches!(d.entries[0], DisplayEntry::Leaf(l) if l.label == "Lisboa"));
    }

    #[test]
    fn remove_and_clear_report_changes() {
        let mut s = Select::new(&items(), SelectConfig::multiple())
            .unwrap()
            .with_value(vec![Value::from(1), Value::from(2)]);
        assert!(s.remove(&Value::from(9)).is_none());
        assert_eq!(
            s.remove(&Value::from(1)).map(|e| e.value),
            Some(EventValue::Many(vec![Value::from(2)]))
        );
        assert!(s.clear().is_some());
        assert!(s.clear().is_none());
    }

    #[test]
    fn failed_rebuild_keeps_tree() {
        let mut s = Select::new(&items(), SelectConfig::single()).unwrap();
        let dup = vec![RawOption::leaf(1, "A"), RawOption::leaf(1, "B")];
        assert_eq!(s.set_options(&dup), Err(NormalizeError::DuplicateValue(Value::from(1))));
        assert_eq!(s.tree().leaf_count(), 4);
    }

    #[test]
    fn recompute_is_scheduled_on_open() {
        let mut s = Select::new(&items(), SelectConfig::multiple()).unwrap();
        s.record_trigger(RecomputeTrigger::VIEWPORT_SCROLL);
        assert_eq!(s.take_recompute(), None);
        s.open();
        s.record_trigger(RecomputeTrigger::VIEWPORT_SCROLL);
        assert_eq!(
            s.take_recompute(),
            Some(RecomputeTrigger::OPEN | RecomputeTrigger::VIEWPORT_SCROLL)
        );
    }
}
