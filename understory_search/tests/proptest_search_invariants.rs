// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariants for folded search and highlighting.
//!
//! 1. Normalized text is idempotent and has no leading, trailing, or doubled spaces.
//! 2. Spans are sorted, disjoint, on `char` boundaries, and agree with their text.
//! 3. Every span folds to the normalized query.
//! 4. Stripping the inserted tags from highlighted output restores the original.
//! 5. A label always finds itself.

use proptest::prelude::*;
use understory_search::{HighlightOptions, highlight, normalize_text, search_text};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Short strings over a small alphabet with diacritics, Hangul, separators, and symbols,
/// so that matches are frequent.
fn text(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop::sample::select(vec![
            'a', 'b', 'n', 'á', 'Á', 'à', 'B', 'ñ', 'N', ' ', ' ', '-', '.', '\'', 'đ', 'd',
            '한', '국',
        ]),
        0..=max_len,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Normalization shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_is_idempotent_and_trimmed(s in text(24)) {
        let n = normalize_text(&s);
        prop_assert_eq!(normalize_text(&n), n.clone());
        prop_assert!(!n.starts_with(' ') && !n.ends_with(' '));
        prop_assert!(!n.contains("  "));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2–3. Span shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn spans_are_ordered_and_faithful(original in text(24), query in text(4)) {
        let needle = normalize_text(&query);
        let spans = search_text(&original, &query);
        if needle.is_empty() {
            prop_assert!(spans.is_empty());
        }
        let mut last = 0;
        for span in &spans {
            prop_assert!(span.start >= last);
            prop_assert!(span.start < span.end);
            prop_assert!(original.is_char_boundary(span.start));
            prop_assert!(original.is_char_boundary(span.end));
            prop_assert_eq!(&original[span.range()], span.text.as_str());
            prop_assert_eq!(normalize_text(&span.text), needle.clone());
            last = span.end;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Highlight round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stripping_tags_restores_original(original in text(24), query in text(3)) {
        let options = HighlightOptions::new().tag("mark").class_name("hit").data("q", 1);
        let spans = search_text(&original, &query);
        let html = highlight(&original, &spans, &options);
        let stripped = html
            .replace(&options.open_tag(), "")
            .replace(&options.close_tag(), "");
        prop_assert_eq!(stripped, original.clone());
        prop_assert_eq!(html.matches(&options.close_tag()).count(), spans.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Self match
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn label_finds_itself(label in text(16)) {
        let spans = search_text(&label, &label);
        if normalize_text(&label).is_empty() {
            prop_assert!(spans.is_empty());
        } else {
            prop_assert_eq!(spans.len(), 1);
        }
    }
}

#[test]
fn accented_name_is_found_by_plain_query() {
    let spans = search_text("José García", "jose");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "José");
    assert_eq!((spans[0].start, spans[0].end), (0, 5));
}
