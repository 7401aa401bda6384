//! Case-insensitive key comparison shared by every lookup in the crate.

/// Compare two lookup keys (titles, borrower ids) ignoring case.
///
/// Folding is done per character with Unicode lowercase mappings, so no
/// intermediate strings are allocated. An empty key matches nothing, not
/// even another empty key.
#[must_use]
pub fn same_key(left: &str, right: &str) -> bool {
    if left.is_empty() || right.is_empty() {
        return false;
    }
    left.chars().flat_map(char::to_lowercase).eq(right.chars().flat_map(char::to_lowercase))
}
