//! Name normalization and matching.
//!
//! Roster names are hand-authored ("De Lara", "Ashlee M. Madriñan") while
//! account display names are typed by users at registration ("Juan A. De
//! Lara Jr."), so the two rarely compare equal as strings. Matching works
//! on normalized token sets instead:
//!
//! 1. Lowercase both names and collapse punctuation to whitespace.
//! 2. Split into word tokens and drop single-letter tokens (initials).
//! 3. The shorter token sequence is the needle, the longer the haystack;
//!    the names match iff every needle token appears somewhere in the
//!    haystack, regardless of order.
//!
//! Order insensitivity is deliberate: roster entries do not follow a
//! consistent given/family name convention.

/// Reduces a free-text personal name to comparable lowercase tokens.
///
/// Punctuation is collapsed to whitespace before splitting and
/// single-letter tokens are removed. Empty input yields an empty vec.
pub fn normalize_name(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Decides whether two raw name strings refer to the same person.
///
/// A name that normalizes to zero tokens never matches anything; without
/// this guard an empty needle would vacuously match every haystack.
pub fn names_match(a: &str, b: &str) -> bool {
    let left = normalize_name(a);
    let right = normalize_name(b);

    if left.is_empty() || right.is_empty() {
        return false;
    }

    let (needle, haystack) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };

    needle.iter().all(|token| haystack.contains(token))
}
