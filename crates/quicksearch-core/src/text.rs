// crates/quicksearch-core/src/text.rs

//! # Text Folding
//!
//! Normalizes strings for case-insensitive comparison while remembering where
//! every folded byte came from in the original string.
//!
//! Lowercasing is not length-preserving in Unicode (`'İ'` lowercases to two
//! chars, transliteration turns `'ß'` into `"ss"`), so match offsets found in
//! the folded text cannot be reused on the original text as-is.
//! [`FoldedText::original_range`] performs that projection explicitly.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How text is normalized before substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldMode {
    /// Unicode lowercase per character.
    #[default]
    CaseInsensitive,
    /// Transliterate to ASCII with `deunicode`, then lowercase
    /// (`"Zürich"` ~ `"zurich"`).
    #[cfg(feature = "transliterate")]
    Transliterate,
}

/// Fold a single char into `out`.
#[inline]
fn push_folded(out: &mut String, ch: char, mode: FoldMode) {
    match mode {
        FoldMode::CaseInsensitive => out.extend(ch.to_lowercase()),
        #[cfg(feature = "transliterate")]
        FoldMode::Transliterate => match deunicode::deunicode_char(ch) {
            Some(ascii) => out.extend(ascii.chars().flat_map(char::to_lowercase)),
            None => out.extend(ch.to_lowercase()),
        },
    }
}

/// Fold a whole string, discarding the offset map.
///
/// # Examples
///
/// ```rust
/// use quicksearch_core::text::{fold, FoldMode};
///
/// assert_eq!(fold("One Hundred", FoldMode::CaseInsensitive), "one hundred");
/// ```
pub fn fold(s: &str, mode: FoldMode) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        push_folded(&mut out, ch, mode);
    }
    out
}

/// One original char and where its folded output starts.
#[derive(Debug, Clone)]
struct CharOrigin {
    folded_start: usize,
    original: Range<usize>,
}

/// A folded string plus the mapping back to the string it was built from.
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    origins: Vec<CharOrigin>,
}

impl FoldedText {
    pub fn new(original: &str, mode: FoldMode) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origins = Vec::with_capacity(original.len());
        for (offset, ch) in original.char_indices() {
            origins.push(CharOrigin {
                folded_start: folded.len(),
                original: offset..offset + ch.len_utf8(),
            });
            push_folded(&mut folded, ch, mode);
        }
        Self { folded, origins }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Index of the original char whose folded output contains `folded_byte`.
    ///
    /// Chars that fold to nothing share their `folded_start` with the next
    /// char; taking the last candidate skips them.
    fn origin_index(&self, folded_byte: usize) -> usize {
        self.origins
            .partition_point(|o| o.folded_start <= folded_byte)
            .saturating_sub(1)
    }

    /// Project a non-empty byte range of the folded text onto the original.
    ///
    /// The result covers every original char that contributed at least one
    /// byte to `folded`, so it always lies on `char` boundaries.
    pub fn original_range(&self, folded: Range<usize>) -> Range<usize> {
        debug_assert!(folded.start < folded.end && folded.end <= self.folded.len());
        let first = &self.origins[self.origin_index(folded.start)];
        let last = &self.origins[self.origin_index(folded.end - 1)];
        first.original.start..last.original.end
    }
}
