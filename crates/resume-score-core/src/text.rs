//! Text helpers shared by the metric calculators.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a plausible email address: something, `@`, something, `.`, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Regex for four or more consecutive whitespace characters.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{4,}").expect("valid regex"));

/// Decorative bullet and symbol characters that trip up resume parsers.
pub const NON_STANDARD_SYMBOLS: &[char] = &[
    '•', '◦', '▪', '▫', '■', '□', '●', '○', '◆', '◇', '►', '▸', '➢', '➤', '✓', '✔', '★', '☆',
    '→',
];

/// Whether `email` looks like a deliverable address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `text` contains any of [`NON_STANDARD_SYMBOLS`].
pub fn has_non_standard_symbols(text: &str) -> bool {
    text.contains(NON_STANDARD_SYMBOLS)
}

/// Whether `text` contains a run of four or more whitespace characters.
pub fn has_whitespace_run(text: &str) -> bool {
    WHITESPACE_RUN.is_match(text)
}

/// The first word of a bullet, lowercased, with every non-letter removed.
///
/// Returns an empty string when the bullet has no leading word.
pub fn first_word(bullet: &str) -> String {
    bullet
        .split_whitespace()
        .next()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphabetic())
                .flat_map(char::to_lowercase)
                .collect()
        })
        .unwrap_or_default()
}

/// Character count, not byte count.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
