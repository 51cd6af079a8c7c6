//! String utilities for the domain layer.

/// Flatten newlines and cut a string to at most `max_chars` characters.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn snippet(s: &str, max_chars: usize) -> String {
    s.replace(['\r', '\n'], " ").chars().take(max_chars).collect()
}
