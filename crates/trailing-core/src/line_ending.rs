//! Line ending helpers.
//!
//! [`crate::Document`] stores text using LF (`'\n'`) newlines. Text loaded with CRLF
//! (`"\r\n"`) or bare CR (`'\r'`) newlines is normalized on load, and the original line ending
//! is restored on output.
//!
//! Line breaks follow LSP: `"\r\n"`, `'\n'` and `'\r'`. Form feeds, `U+2028` and friends are
//! ordinary characters.

use std::borrow::Cow;

/// The newline sequence of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
    /// Classic Mac-style CR (`'\r'`).
    Cr,
}

impl LineEnding {
    /// Detect the line ending of a text: CRLF if it contains any `"\r\n"`, CR if it only breaks
    /// lines with `'\r'`, LF otherwise.
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else if text.contains('\r') && !text.contains('\n') {
            Self::Cr
        } else {
            Self::Lf
        }
    }

    /// Rewrite this line ending in `text` to LF.
    ///
    /// Stray line breaks of another kind are left alone.
    pub fn normalize(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Lf => Cow::Borrowed(text),
            Self::Crlf => Cow::Owned(text.replace("\r\n", "\n")),
            Self::Cr => Cow::Owned(text.replace('\r', "\n")),
        }
    }

    /// Convert an LF-normalized text to this line ending.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
            Self::Cr => text.replace('\n', "\r"),
        }
    }
}

/// Split `text` at LSP line breaks, without the terminators.
///
/// `N` line breaks yield `N + 1` lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(at) => {
                let skip = if current[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[at + skip..]);
                Some(&current[..at])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
