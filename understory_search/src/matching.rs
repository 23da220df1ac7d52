// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diacritic-insensitive matching that reports spans in the original text.
//!
//! ## Algorithm
//!
//! The query is normalized with [`normalize_text`]. The original text is
//! scanned one character at a time and each character is paired with its own
//! folded form and its byte offset. Characters whose folded form is empty are
//! discarded, except for word separators that directly follow a kept word
//! character; those stand in for the single space of the normalized query.
//!
//! A window then slides over the kept characters. It starts at a character
//! whose folded form starts with the query's first character and grows until
//! its folded length (a separator counts as one space) reaches the query's
//! length. The window matches when its folded text, with separators collapsed
//! to single spaces, equals the query. After a match the scan skips the kept
//! character that follows the window, so matches never overlap or touch.
//!
//! Spans are reported as byte ranges into the original text, always on
//! `char` boundaries.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::fold::{fold_char, is_separator, normalize_text};

/// A match in the original text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSpan {
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
    /// The matched slice of the original text.
    pub text: String,
}

impl MatchSpan {
    /// Byte range of the span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A character of the original text kept for matching.
#[derive(Debug)]
struct Kept {
    offset: usize,
    ch: char,
    /// Folded form; empty for a separator.
    folded: String,
}

fn kept_chars(original: &str) -> Vec<Kept> {
    let mut kept: Vec<Kept> = Vec::with_capacity(original.len());
    for (offset, ch) in original.char_indices() {
        let folded = fold_char(ch);
        let keep = if !folded.is_empty() {
            true
        } else if is_separator(ch) {
            kept.last().is_some_and(|k| !k.folded.is_empty())
        } else {
            false
        };
        if keep {
            kept.push(Kept { offset, ch, folded });
        }
    }
    kept
}

/// Number of kept characters from the start of `kept` whose folded length is
/// exactly `width`, or `None` when no prefix has that length.
fn window_len(kept: &[Kept], width: usize) -> Option<usize> {
    let mut folded = 0;
    for (n, k) in kept.iter().enumerate() {
        folded += k.folded.chars().count().max(1);
        if folded >= width {
            return (folded == width).then_some(n + 1);
        }
    }
    None
}

/// Fold a window into `out`, joining words with single spaces.
fn fold_window(window: &[Kept], out: &mut String) {
    out.clear();
    let mut pending = false;
    for k in window {
        if k.folded.is_empty() {
            pending = true;
            continue;
        }
        if pending && !out.is_empty() {
            out.push(' ');
        }
        pending = false;
        out.push_str(&k.folded);
    }
}

/// Find every non-overlapping occurrence of `query` in `original`, ignoring
/// case, diacritics, symbols, and whitespace differences.
///
/// An empty query (or one that normalizes to nothing) yields no spans.
///
/// ```
/// use understory_search::search_text;
///
/// let spans = search_text("José García", "jose");
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].text, "José");
/// assert_eq!(spans[0].range(), 0..5);
/// ```
pub fn search_text(original: &str, query: &str) -> Vec<MatchSpan> {
    let needle = normalize_text(query);
    let Some(first) = needle.chars().next() else {
        return Vec::new();
    };
    let width = needle.chars().count();
    let kept = kept_chars(original);

    let mut spans = Vec::new();
    let mut window = String::with_capacity(needle.len());
    let mut i = 0;
    while i < kept.len() {
        if !kept[i].folded.starts_with(first) {
            i += 1;
            continue;
        }
        let Some(len) = window_len(&kept[i..], width) else {
            i += 1;
            continue;
        };
        let j = i + len;
        fold_window(&kept[i..j], &mut window);
        if window != needle {
            i += 1;
            continue;
        }
        let last = &kept[j - 1];
        let start = kept[i].offset;
        let end = last.offset + last.ch.len_utf8();
        spans.push(MatchSpan {
            start,
            end,
            text: original[start..end].to_owned(),
        });
        i = j + 1;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[MatchSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(search_text("anything", "").is_empty());
        assert!(search_text("anything", "   ").is_empty());
        assert!(search_text("anything", "?!").is_empty());
        assert!(search_text("", "a").is_empty());
    }

    #[test]
    fn matches_across_diacritics_in_either_direction() {
        assert_eq!(texts(&search_text("José García", "garcia")), ["García"]);
        assert_eq!(texts(&search_text("Jose Garcia", "GARCÍA")), ["Garcia"]);
        assert_eq!(texts(&search_text("Đà Nẵng", "da nang")), ["Đà Nẵng"]);
    }

    #[test]
    fn byte_offsets_point_into_original() {
        let original = "Crème brûlée";
        let spans = search_text(original, "brulee");
        assert_eq!(spans.len(), 1);
        assert_eq!(&original[spans[0].range()], "brûlée");
        assert_eq!(spans[0].start, "Crème ".len());
    }

    #[test]
    fn whitespace_runs_match_a_single_space() {
        let spans = search_text("New   York", "new york");
        assert_eq!(texts(&spans), ["New   York"]);
    }

    #[test]
    fn symbols_are_skipped_inside_matches() {
        assert_eq!(texts(&search_text("O'Brien", "obrien")), ["O'Brien"]);
        assert_eq!(texts(&search_text("e-mail", "e mail")), ["e-mail"]);
    }

    #[test]
    fn skips_one_character_after_each_match() {
        let spans = search_text("banana", "an");
        assert_eq!(spans.iter().map(MatchSpan::range).collect::<Vec<_>>(), [1..3]);
        assert_eq!(search_text("aaaa", "aa").len(), 1);
        assert_eq!(texts(&search_text("aaaaa", "aa")), ["aa", "aa"]);
        assert_eq!(texts(&search_text("ana ána", "ana")), ["ana", "ána"]);
    }

    #[test]
    fn non_latin_labels_match_themselves() {
        assert_eq!(texts(&search_text("한국어", "한")), ["한"]);
        assert_eq!(texts(&search_text("한국어", "한국어")), ["한국어"]);
        assert_eq!(texts(&search_text("대한민국", "한민")), ["한민"]);
        assert_eq!(texts(&search_text("東京 タワー", "タワー")), ["タワー"]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(search_text("Paris", "london").is_empty());
        assert!(search_text("ab", "abc").is_empty());
    }
}
