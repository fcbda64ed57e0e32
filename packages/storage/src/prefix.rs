//! Namespace prefixing over storage keys.
//!
//! Keys are joined to a prefix with a single `.` separator on the way out
//! to the backend and stripped again on the way back, so application code
//! never sees namespaced keys. The empty prefix means no namespace.

/// Separator between a namespace prefix and the key proper.
pub const SEPARATOR: char = '.';

/// Join a key to a namespace prefix.
///
/// `add_prefix("", key)` is the identity; otherwise the result is
/// `prefix.key`.
///
/// Matching elsewhere in the protocol (list, clear) is plain string-prefix
/// matching, not separator-aware: prefix `"a"` also matches key `"ab.c"`.
pub fn add_prefix(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, SEPARATOR, key)
    }
}

/// Strip a namespace prefix from a key produced by [`add_prefix`].
///
/// Drops the first `prefix.len() + 1` characters (prefix plus separator);
/// with the empty prefix the key is returned unchanged. Exact inverse of
/// `add_prefix` for any key it produced with the same prefix.
pub fn strip_prefix(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        key.chars().skip(prefix.chars().count() + 1).collect()
    }
}
