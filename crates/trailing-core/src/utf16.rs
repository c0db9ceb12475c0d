//! UTF-16 coordinate helpers.
//!
//! Line text is stored as UTF-8, while positions coming from hosts count UTF-16 code units.

/// Length of `text` in UTF-16 code units.
pub fn len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Convert a UTF-16 code unit offset to a character offset.
///
/// An offset that falls inside a surrogate pair rounds up to the next character.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut current_utf16 = 0;
    let mut char_count = 0;

    for ch in text.chars() {
        if current_utf16 >= utf16_offset {
            break;
        }
        current_utf16 += ch.len_utf16();
        char_count += 1;
    }

    char_count
}
