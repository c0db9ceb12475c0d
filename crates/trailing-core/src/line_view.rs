//! Line classification.
//!
//! A [`LineView`] is a read-only snapshot of one line taken right before it is toggled: whether
//! it already ends with the marker (ignoring trailing whitespace) and where the trimmed text ends.

use crate::marker::Marker;
use crate::utf16;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\x{FEFF}]*").expect("valid leading whitespace regex"));

/// Whitespace for trimming purposes: Unicode White_Space plus the byte order mark.
pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Snapshot of a single line, classified against a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView<'a> {
    text: &'a str,
    trimmed: &'a str,
    len: usize,
    trimmed_len: usize,
    has_marker: bool,
}

impl<'a> LineView<'a> {
    /// Classify `text` against `marker`.
    pub fn classify(text: &'a str, marker: &Marker) -> Self {
        let trimmed = text.trim_end_matches(is_blank);
        let len = utf16::len(text);
        let trimmed_len = len - utf16::len(&text[trimmed.len()..]);
        Self {
            text,
            trimmed,
            len,
            trimmed_len,
            has_marker: trimmed.ends_with(marker.as_str()),
        }
    }

    /// Raw line text (without the line terminator).
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Line text with trailing whitespace removed.
    pub fn trimmed_text(&self) -> &'a str {
        self.trimmed
    }

    /// Whether the trimmed line already ends with the marker.
    pub fn has_marker(&self) -> bool {
        self.has_marker
    }

    /// Length of the raw line in UTF-16 code units (the end-of-line column).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for an empty line.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Column where the trimmed text ends; markers are inserted and removed here.
    pub fn trimmed_end(&self) -> usize {
        self.trimmed_len
    }

    /// Number of trailing whitespace code units.
    pub fn trailing_whitespace(&self) -> usize {
        self.len - self.trimmed_len
    }

    /// Signed trim offset relative to the end of line (`0` or negative).
    pub fn trimmed_delta(&self) -> isize {
        -(self.trailing_whitespace() as isize)
    }

    /// Indentation carried over to a freshly inserted line.
    ///
    /// Matched against the trimmed text, so a whitespace-only line has no indentation.
    pub fn leading_whitespace(&self) -> &'a str {
        LEADING_WHITESPACE
            .find(self.trimmed)
            .map_or("", |m| m.as_str())
    }
}

/// Classify a line against a marker. Shorthand for [`LineView::classify`].
pub fn classify<'a>(text: &'a str, marker: &Marker) -> LineView<'a> {
    LineView::classify(text, marker)
}
