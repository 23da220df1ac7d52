// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text normalization for search: case and diacritic folding.
//!
//! Folding works per character:
//!
//! 1. Lowercase.
//! 2. Letters without a canonical decomposition that still read as a base
//!    Latin letter (`đ`, `ø`, `ł`, ...) are mapped through a fixed table.
//! 3. Everything else is canonically decomposed. When the decomposition
//!    carries combining marks, the marks are dropped and the base kept, so `é`
//!    becomes `e` and `ệ` becomes `e`. Characters without marks in their
//!    decomposition are kept whole, so a Hangul syllable stays one syllable.
//! 4. Only word characters (alphanumerics and `_`) survive.
//!
//! Whitespace and hyphens act as word separators.

use alloc::string::String;

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Letters that carry a stroke or other non-decomposable modification.
const STROKE_TABLE: &[(char, char)] = &[
    ('đ', 'd'),
    ('ð', 'd'),
    ('ħ', 'h'),
    ('ı', 'i'),
    ('ł', 'l'),
    ('ŀ', 'l'),
    ('ø', 'o'),
    ('ŧ', 't'),
    ('ƀ', 'b'),
    ('ƶ', 'z'),
];

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `c` separates words.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Append the folded form of `c` to `out`. Separators and symbols append nothing.
pub(crate) fn fold_into(c: char, out: &mut String) {
    for lower in c.to_lowercase() {
        if let Some(&(_, base)) = STROKE_TABLE.iter().find(|(from, _)| *from == lower) {
            out.push(base);
            continue;
        }
        let start = out.len();
        let mut stripped = false;
        decompose_canonical(lower, |d| {
            if is_combining_mark(d) {
                stripped = true;
            } else if is_word(d) {
                out.push(d);
            }
        });
        if !stripped {
            out.truncate(start);
            if is_word(lower) {
                out.push(lower);
            }
        }
    }
}

/// Folded form of a single character; empty for separators, symbols, and marks.
pub fn fold_char(c: char) -> String {
    let mut out = String::new();
    if !is_separator(c) {
        fold_into(c, &mut out);
    }
    out
}

/// Fold `s` and join its words with `separator`.
///
/// Runs of separators collapse into one; leading and trailing separators are
/// removed; symbols are dropped without introducing a word break.
///
/// ```
/// use understory_search::slugify;
///
/// assert_eq!(slugify("  Crème Brûlée - Déjà vu! ", "-"), "creme-brulee-deja-vu");
/// ```
pub fn slugify(s: &str, separator: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending = false;
    for c in s.chars() {
        if is_separator(c) {
            pending = true;
            continue;
        }
        let mark = out.len();
        if pending && !out.is_empty() {
            out.push_str(separator);
        }
        let word_start = out.len();
        fold_into(c, &mut out);
        if out.len() == word_start {
            out.truncate(mark);
        } else {
            pending = false;
        }
    }
    out
}

/// Normalize text for comparison: folded words joined by single spaces.
///
/// ```
/// use understory_search::normalize_text;
///
/// assert_eq!(normalize_text("  José   GARCÍA "), "jose garcia");
/// assert_eq!(normalize_text("Đà Nẵng"), "da nang");
/// ```
pub fn normalize_text(s: &str) -> String {
    slugify(s, " ")
}
