//! Locale-aware string ordering
//!
//! Approximates root-locale collation for Latin text in three levels:
//!
//! 1. Base letters, ignoring accents and case (`"apple" < "Banana"`)
//! 2. Accents (`"resume" < "résumé"`)
//! 3. Case, lowercase first (`"a" < "A"`)
//!
//! Strings equal on all three levels fall back to code point order so the
//! result is a total order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two strings the way a human-facing sort expects
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased base letters, combining marks removed
fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased decomposition, combining marks kept
fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Per-character case weight, lowercase first
fn tertiary_key(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| u8::from(c.is_uppercase()))
}
