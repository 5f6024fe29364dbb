//! Title to slug derivation.
//!
//! Two passes exist. [`generate_slug`] is the canonical form stored with an
//! entity. [`sanitize_typed_slug`] is the lenient pass applied while the slug
//! field is being typed into; it leaves edge hyphens and accented letters to
//! the strict pass that runs on blur.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// ASCII letters and digits. Underscores are treated as separators.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Whitespace, including the byte order mark, and underscores.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}' || c == '_'
}

/// Drop anything that is not a word char, separator or hyphen, turn each
/// separator run into one hyphen and collapse hyphen runs.
fn hyphenate(input: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    let mut in_separator = false;

    for c in input {
        if is_word_char(c) {
            if in_separator {
                out.push('-');
            }
            out.push(c);
            in_separator = false;
        } else if is_separator(c) || c == '-' {
            in_separator = true;
        }
        // Punctuation is removed outright and does not break a separator run.
    }

    if in_separator {
        out.push('-');
    }
    out
}

/// Canonical slug for `title`.
///
/// Lower-cases, trims, strips diacritics via NFD, removes punctuation,
/// hyphenates whitespace and removes edge hyphens. The result only contains
/// `[a-z0-9-]`, never starts or ends with a hyphen and never repeats one.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = lowered
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c));

    hyphenate(stripped).trim_matches('-').to_string()
}

/// Lenient pass for a slug field while it has focus: lower-case, punctuation
/// removed, whitespace hyphenated, hyphen runs collapsed. A trailing hyphen
/// survives so the next word can be typed after it.
pub fn sanitize_typed_slug(input: &str) -> String {
    hyphenate(input.to_lowercase().chars())
}
