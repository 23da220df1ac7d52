// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recompute bookkeeping for hosts.
//!
//! Placement is a pure function; the host decides when to call it. A placement
//! must be computed once right after the panel opens and again whenever any of
//! the [`RecomputeTrigger`] events occurs. Hosts that batch geometry work per
//! frame can record events in a [`PendingRecompute`] and drain it once per frame.

bitflags::bitflags! {
    /// Events after which a placement is stale.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RecomputeTrigger: u8 {
        /// The panel was just opened.
        const OPEN                = 0b0000_0001;
        /// The anchor changed size.
        const ANCHOR_RESIZE       = 0b0000_0010;
        /// The panel content changed size.
        const CONTENT_RESIZE      = 0b0000_0100;
        /// The viewport changed size.
        const VIEWPORT_RESIZE     = 0b0000_1000;
        /// The viewport scrolled.
        const VIEWPORT_SCROLL     = 0b0001_0000;
        /// The anchor's visibility or intersection with the viewport changed.
        const ANCHOR_INTERSECTION = 0b0010_0000;
    }
}

/// Accumulates triggers between recomputations.
///
/// Nothing is recorded while the panel is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingRecompute {
    open: bool,
    pending: RecomputeTrigger,
}

impl PendingRecompute {
    /// A tracker for a closed panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel opened; schedules the initial placement.
    pub fn open(&mut self) {
        self.open = true;
        self.pending = RecomputeTrigger::OPEN;
    }

    /// The panel closed; drops anything pending.
    pub fn close(&mut self) {
        self.open = false;
        self.pending = RecomputeTrigger::empty();
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Record an event. Ignored while closed.
    pub fn record(&mut self, trigger: RecomputeTrigger) {
        if self.open {
            self.pending |= trigger;
        }
    }

    /// Whether a recompute is due.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take the accumulated triggers, or `None` when nothing is due.
    pub fn take(&mut self) -> Option<RecomputeTrigger> {
        if self.pending.is_empty() {
            return None;
        }
        let taken = self.pending;
        self.pending = RecomputeTrigger::empty();
        tracing::trace!(triggers = ?taken, "placement recompute due");
        Some(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_schedules_initial_placement() {
        let mut p = PendingRecompute::new();
        assert_eq!(p.take(), None);
        p.open();
        assert_eq!(p.take(), Some(RecomputeTrigger::OPEN));
        assert_eq!(p.take(), None);
    }

    #[test]
    fn events_coalesce_until_taken() {
        let mut p = PendingRecompute::new();
        p.open();
        p.record(RecomputeTrigger::VIEWPORT_SCROLL);
        p.record(RecomputeTrigger::VIEWPORT_SCROLL | RecomputeTrigger::CONTENT_RESIZE);
        assert_eq!(
            p.take(),
            Some(RecomputeTrigger::OPEN | RecomputeTrigger::VIEWPORT_SCROLL | RecomputeTrigger::CONTENT_RESIZE)
        );
    }

    #[test]
    fn closed_panel_ignores_events() {
        let mut p = PendingRecompute::new();
        p.record(RecomputeTrigger::ANCHOR_RESIZE);
        assert!(!p.is_pending());
        p.open();
        p.close();
        assert!(!p.is_open());
        assert_eq!(p.take(), None);
    }
}
