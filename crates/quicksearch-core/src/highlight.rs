// crates/quicksearch-core/src/highlight.rs

//! # Match Highlighting
//!
//! Locates every case-insensitive occurrence of a query inside a display
//! string so a renderer can emphasize it.
//!
//! Occurrences are found greedily from the left and never overlap: the next
//! scan starts where the previous match ended, so `"aa"` in `"AAAA"` yields
//! `[0,2)` and `[2,4)`, not three spans.
//!
//! Spans are byte offsets into the **original** string and always fall on
//! `char` boundaries, so `&haystack[span.range()]` is the matched text. Use
//! [`HighlightSpan::char_range`] when the consumer counts characters instead.

use crate::error::{Result, SearchError};
use crate::text::{fold, FoldMode, FoldedText};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A non-empty, half-open byte range of a haystack that matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightSpan {
    start: usize,
    end: usize,
}

impl HighlightSpan {
    /// Build a span, rejecting empty or inverted ranges.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(SearchError::invalid(format!(
                "highlight span must satisfy start < end (got {start}..{end})"
            )));
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`; spans are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The same span expressed in `char` positions of `haystack`.
    ///
    /// `None` if the span does not fit `haystack` or splits one of its chars,
    /// e.g. a span computed for a different row.
    pub fn char_range(&self, haystack: &str) -> Option<Range<usize>> {
        let start = haystack.get(..self.start)?.chars().count();
        let len = haystack.get(self.range())?.chars().count();
        Some(start..start + len)
    }
}

/// A pre-folded query, reusable across every row of a result list.
///
/// # Examples
///
/// ```rust
/// use quicksearch_core::highlight::Highlighter;
///
/// let h = Highlighter::new("one");
/// let spans = h.spans("One Hundred");
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].range(), 0..3);
/// assert!(h.spans("Two").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
    needle: String,
    mode: FoldMode,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        Self::with_mode(query, FoldMode::default())
    }

    pub fn with_mode(query: &str, mode: FoldMode) -> Self {
        Self {
            needle: fold(query, mode),
            mode,
        }
    }

    pub fn mode(&self) -> FoldMode {
        self.mode
    }

    /// `true` when the folded query is empty: no spans are produced and every
    /// haystack passes [`Highlighter::is_match`].
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Substring test without computing spans.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.needle.is_empty() || fold(haystack, self.mode).contains(&self.needle)
    }

    /// All non-overlapping occurrences in `haystack`, ordered by `start`.
    pub fn spans(&self, haystack: &str) -> Vec<HighlightSpan> {
        let mut out: Vec<HighlightSpan> = Vec::new();
        if self.needle.is_empty() || haystack.is_empty() {
            return out;
        }

        let folded = FoldedText::new(haystack, self.mode);
        let hay = folded.as_str();
        let mut from = 0;

        while let Some(pos) = hay[from..].find(&self.needle) {
            let start = from + pos;
            let end = start + self.needle.len();
            let original = folded.original_range(start..end);

            // Two matches inside one expanded char widen to the same original
            // char; fold them into one span. Adjacent spans stay separate.
            match out.last_mut() {
                Some(prev) if original.start < prev.end => {
                    prev.end = prev.end.max(original.end);
                }
                _ => out.push(HighlightSpan {
                    start: original.start,
                    end: original.end,
                }),
            }
            from = end;
        }
        out
    }
}

/// Every case-insensitive occurrence of `query` in `haystack`.
///
/// Empty `query` or `haystack` yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use quicksearch_core::highlight::find_occurrences;
///
/// let spans: Vec<_> = find_occurrences("hello world", "o")
///     .iter()
///     .map(|s| s.range())
///     .collect();
/// assert_eq!(spans, vec![4..5, 7..8]);
/// ```
pub fn find_occurrences(haystack: &str, query: &str) -> Vec<HighlightSpan> {
    Highlighter::new(query).spans(haystack)
}

/// Like [`find_occurrences`] with an explicit [`FoldMode`].
pub fn find_occurrences_with(haystack: &str, query: &str, mode: FoldMode) -> Vec<HighlightSpan> {
    Highlighter::with_mode(query, mode).spans(haystack)
}

/// A piece of a haystack, emphasized or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// Split `haystack` into plain and emphasized pieces covering all of it.
///
/// `spans` are expected to come from the highlighter for this same haystack;
/// spans that do not fit it are skipped.
pub fn segments<'a>(haystack: &'a str, spans: &[HighlightSpan]) -> Vec<Segment<'a>> {
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor {
            continue;
        }
        let (Some(plain), Some(hit)) = (
            haystack.get(cursor..span.start),
            haystack.get(span.range()),
        ) else {
            continue;
        };
        if !plain.is_empty() {
            out.push(Segment {
                text: plain,
                emphasized: false,
            });
        }
        out.push(Segment {
            text: hit,
            emphasized: true,
        });
        cursor = span.end;
    }

    if cursor < haystack.len() {
        out.push(Segment {
            text: &haystack[cursor..],
            emphasized: false,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(spans: &[HighlightSpan]) -> Vec<Range<usize>> {
        spans.iter().map(HighlightSpan::range).collect()
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(find_occurrences("Alpha", "").is_empty());
        assert!(find_occurrences("", "").is_empty());
        assert!(find_occurrences("", "a").is_empty());
    }

    #[test]
    fn repeated_pattern_is_greedy_and_non_overlapping() {
        assert_eq!(ranges(&find_occurrences("AAAA", "aa")), vec![0..2, 2..4]);
        assert_eq!(ranges(&find_occurrences("aaa", "aa")), vec![0..2]);
    }

    #[test]
    fn finds_every_occurrence_case_insensitively() {
        assert_eq!(ranges(&find_occurrences("hello world", "o")), vec![4..5, 7..8]);
        assert_eq!(ranges(&find_occurrences("Papa", "PA")), vec![0..2, 2..4]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(find_occurrences("abc", "xyz").is_empty());
        assert!(find_occurrences("ab", "abc").is_empty());
    }

    #[test]
    fn spans_are_sorted_and_disjoint() {
        let hay = "Ninety-nine nine NINE";
        let spans = find_occurrences(hay, "nine");
        // "Ninety" starts with "nine" too
        assert_eq!(spans.len(), 4);
        for pair in spans.windows(2) {
            assert!(pair[0].end() <= pair[1].start());
        }
        for s in &spans {
            assert!(s.start() < s.end() && s.end() <= hay.len());
            assert!(hay[s.range()].eq_ignore_ascii_case("nine"));
        }
    }

    #[test]
    fn spans_index_the_original_string_after_expanding_fold() {
        let hay = "İİ ab";
        let spans = find_occurrences(hay, "ab");
        assert_eq!(spans.len(), 1);
        assert_eq!(&hay[spans[0].range()], "ab");
        assert_eq!(spans[0].char_range(hay), Some(3..5));
    }

    #[test]
    fn char_range_counts_characters() {
        let hay = "Über über";
        let spans = find_occurrences(hay, "über");
        assert_eq!(ranges(&spans), vec![0..5, 6..11]);
        assert_eq!(spans[1].char_range(hay), Some(5..9));
    }

    #[test]
    fn char_range_of_a_foreign_span_is_none() {
        let span = find_occurrences("One Hundred", "hundred")[0];
        assert_eq!(span.char_range("One"), None);
        // byte 1 is inside 'Ü'
        assert_eq!(HighlightSpan::new(1, 3).unwrap().char_range("Über"), None);
        assert_eq!(span.char_range("One Hundred"), Some(4..11));
    }

    #[cfg(feature = "transliterate")]
    #[test]
    fn matches_inside_one_expanded_char_merge() {
        // 'ß' folds to "ss": both 's' matches land on the same char.
        let hay = "Straße";
        let spans = find_occurrences_with(hay, "s", FoldMode::Transliterate);
        assert_eq!(ranges(&spans), vec![0..1, 4..6]);
    }

    #[cfg(feature = "transliterate")]
    #[test]
    fn transliterate_mode_ignores_accents() {
        let hay = "Zürich";
        let spans = find_occurrences_with(hay, "zur", FoldMode::Transliterate);
        assert_eq!(&hay[spans[0].range()], "Zür");
        assert!(find_occurrences(hay, "zur").is_empty());
    }

    #[test]
    fn span_constructor_rejects_empty_ranges() {
        assert!(HighlightSpan::new(2, 2).is_err());
        assert!(HighlightSpan::new(3, 1).is_err());
        assert_eq!(HighlightSpan::new(1, 3).unwrap().len(), 2);
    }

    #[test]
    fn segments_cover_the_whole_string() {
        let hay = "hello world";
        let spans = find_occurrences(hay, "o");
        let segs = segments(hay, &spans);
        let joined: String = segs.iter().map(|s| s.text).collect();
        assert_eq!(joined, hay);
        let hits: Vec<_> = segs.iter().filter(|s| s.emphasized).map(|s| s.text).collect();
        assert_eq!(hits, vec!["o", "o"]);
        assert_eq!(segs.first().map(|s| s.text), Some("hell"));
    }

    #[test]
    fn segments_without_spans_is_one_plain_piece() {
        let segs = segments("Zulu", &[]);
        assert_eq!(
            segs,
            vec![Segment {
                text: "Zulu",
                emphasized: false
            }]
        );
        assert!(segments("", &[]).is_empty());
    }
}
