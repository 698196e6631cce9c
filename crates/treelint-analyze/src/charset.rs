//! Character allow-list for file and directory names.

use itertools::Itertools;
use unicode_normalization::UnicodeNormalization;

/// Punctuation permitted in names, including the numero sign.
const ALLOWED_PUNCTUATION: &[char] = &[
    '.', ',', '-', '_', '(', ')', '+', '!', '[', ']', '№', ' ',
];

/// Cyrillic letters outside the basic `а..я` / `А..Я` ranges.
const EXTENDED_CYRILLIC: &[char] = &[
    'ё', 'Ё', 'і', 'І', 'ї', 'Ї', 'є', 'Є', 'ґ', 'Ґ', 'ў', 'Ў',
];

/// Check if a single character may appear in a name.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, 'а'..='я' | 'А'..='Я')
        || EXTENDED_CYRILLIC.contains(&c)
        || ALLOWED_PUNCTUATION.contains(&c)
}

/// Check if a name is non-empty and made only of allowed characters.
///
/// Names are compared in NFC form so decomposed letters (as stored by
/// some filesystems) match their precomposed equivalents.
pub fn has_only_allowed_chars(name: &str) -> bool {
    !name.is_empty() && name.nfc().all(is_allowed_char)
}

/// Distinct disallowed characters of `name`, in order of appearance.
pub fn offending_chars(name: &str) -> Vec<char> {
    name.nfc().filter(|c| !is_allowed_char(*c)).unique().collect()
}
