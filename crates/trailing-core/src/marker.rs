use crate::error::ToggleError;
use crate::line_view::is_blank;
use crate::utf16;
use std::fmt;

/// The symbol being toggled at the end of lines (e.g. `,`).
///
/// Markers may be longer than one character; all offset arithmetic uses
/// [`Marker::len_utf16`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    text: String,
    len_utf16: usize,
}

impl Marker {
    /// Create a marker.
    ///
    /// Empty markers are rejected, and so are markers ending with whitespace: lines are matched
    /// after trailing whitespace is trimmed, so such a marker would never be found again.
    pub fn new(text: impl Into<String>) -> Result<Self, ToggleError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ToggleError::EmptyMarker);
        }
        if text.ends_with(is_blank) {
            return Err(ToggleError::TrailingWhitespaceMarker(text));
        }
        let len_utf16 = utf16::len(&text);
        Ok(Self { text, len_utf16 })
    }

    /// The trailing comma.
    pub fn comma() -> Self {
        Self {
            text: ",".to_string(),
            len_utf16: 1,
        }
    }

    /// The marker text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the marker in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.len_utf16
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
