//! Terminal rendering of highlighted rows.

use quicksearch_core::highlight::{segments, HighlightSpan};
use quicksearch_core::search::ResultRow;

const EMPHASIS_ON: &str = "\x1b[1;31m";
const EMPHASIS_OFF: &str = "\x1b[0m";

/// How emphasized text is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bold red via ANSI escapes.
    Ansi,
    /// `[match]`
    Plain,
}

impl Style {
    fn wrap(self, out: &mut String, text: &str) {
        match self {
            Style::Ansi => {
                out.push_str(EMPHASIS_ON);
                out.push_str(text);
                out.push_str(EMPHASIS_OFF);
            }
            Style::Plain => {
                out.push('[');
                out.push_str(text);
                out.push(']');
            }
        }
    }
}

pub fn emphasize(text: &str, spans: &[HighlightSpan], style: Style) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 8);
    for seg in segments(text, spans) {
        if seg.emphasized {
            style.wrap(&mut out, seg.text);
        } else {
            out.push_str(seg.text);
        }
    }
    out
}

pub fn render_row(row: &ResultRow<'_>, style: Style) -> String {
    match row {
        ResultRow::Placeholder => row.text().to_string(),
        ResultRow::Item { text, spans, .. } => emphasize(text, spans, style),
    }
}

/// Recent-search rows carry a magnifier prefix.
pub fn render_recent(index: usize, term: &str) -> String {
    format!("{index:>3}  🔍 {term}")
}
