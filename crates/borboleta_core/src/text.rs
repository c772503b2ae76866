//! Text helpers.

/// Longest prefix of `text` holding at most `max_chars` characters.
///
/// Cuts on character boundaries, so multi-byte Portuguese letters are never
/// split.
///
/// # Examples
///
/// ```
/// use borboleta_core::excerpt;
///
/// assert_eq!(excerpt("Ação imediata", 4), "Ação");
/// assert_eq!(excerpt("curto", 50), "curto");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
