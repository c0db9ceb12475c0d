//! Read access to document lines.

use crate::line_ending::split_lines;
use std::borrow::Cow;

/// Read-only access to the lines of a document (without line terminators).
pub trait LineAccessor {
    /// Number of lines in the document.
    fn line_count(&self) -> usize;

    /// Text of line `index`, or `None` if out of range.
    fn line(&self, index: usize) -> Option<Cow<'_, str>>;
}

impl<S: AsRef<str>> LineAccessor for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|line| Cow::Borrowed(line.as_ref()))
    }
}

impl<S: AsRef<str>> LineAccessor for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line(index)
    }
}

/// Lines borrowed from a block of text.
///
/// Lines end at `"\r\n"`, `'\n'` or `'\r'`, the same breaks [`crate::Document`] uses; `N`
/// breaks yield `N + 1` lines.
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextLines<'a> {
    /// Split `text` into lines.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines(text).collect(),
        }
    }
}

impl LineAccessor for TextLines<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.lines.get(index).map(|line| Cow::Borrowed(*line))
    }
}
