//! Character-boundary-safe string helpers.

/// Returns the prefix of `s` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside a
/// multi-byte character.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Like [`truncate_chars`], but backs up to the last whitespace inside the
/// prefix so a word is never cut in half.  Falls back to the hard cut when
/// the prefix holds no whitespace.
pub fn truncate_at_word(s: &str, max_chars: usize) -> &str {
    let prefix = truncate_chars(s, max_chars);
    if prefix.len() == s.len() {
        return s;
    }
    if s[prefix.len()..].starts_with(char::is_whitespace) {
        return prefix.trim_end();
    }
    match prefix.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => prefix[..idx].trim_end(),
        _ => prefix,
    }
}
