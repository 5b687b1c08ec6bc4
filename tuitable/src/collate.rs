//! Locale-style string ordering for the text comparison tier.

use std::cmp::Ordering;

/// Compare two strings the way a locale-aware sort presents them: case
/// differences are secondary, so "Apple" sorts next to "apple" instead of
/// before every lowercase word.
///
/// The primary pass is case-insensitive. Ties break on the first character
/// pair differing only by case, lowercase first, then on length.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            return match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => ca.cmp(&cb),
            };
        }
    }

    a.chars().count().cmp(&b.chars().count())
}
