//! Text preparation stages for color matching.
//!
//! Each stage takes the whole working string and returns a new one, so
//! stages can be tested in isolation. [`prepare`] runs them in order:
//!
//! 1. [`fold_case`]
//! 2. [`strip_not_color`]
//! 3. [`expand_abbreviations`]
//! 4. [`correct_typos`]
//! 5. [`fold_punctuation`]

use crate::vocabulary::{NOT_COLOR, SHORT_SHADES, SHORT_SHADES_BARE, TYPOS};

/// Run every stage over `title`.
pub fn prepare(title: &str) -> String {
    let text = fold_case(title);
    let text = strip_not_color(&text);
    let text = expand_abbreviations(&text);
    let text = correct_typos(&text);
    fold_punctuation(&text)
}

/// Lowercase, add a trailing space sentinel, fold plural adjective endings
/// ("ые", "ие") to the singular and "ё" to "е".
pub fn fold_case(title: &str) -> String {
    let mut text = title.to_lowercase();
    text.push(' ');
    text.replace("ые", "ый")
        .replace("ие", "ий")
        .replace('ё', "е")
}

/// Blank out tokens that resemble shade abbreviations but are not colors.
pub fn strip_not_color(text: &str) -> String {
    NOT_COLOR
        .iter()
        .fold(text.to_string(), |text, token| text.replace(token, " "))
}

/// Drop the punctuation of abbreviations that end a word, then expand the
/// remaining abbreviations in table order.
pub fn expand_abbreviations(text: &str) -> String {
    let text = SHORT_SHADES_BARE
        .iter()
        .fold(text.to_string(), |text, (short, bare)| {
            text.replace(short.as_str(), bare)
        });

    SHORT_SHADES
        .iter()
        .fold(text, |text, (short, full)| text.replace(short, full))
}

/// Substitute known misspellings anywhere in the text, including inside
/// longer words.
pub fn correct_typos(text: &str) -> String {
    TYPOS
        .iter()
        .fold(text.to_string(), |text, (typo, correct)| {
            text.replace(typo, correct)
        })
}

/// Replace ASCII punctuation other than the hyphen with spaces.
pub fn fold_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_punctuation() && c != '-' {
                ' '
            } else {
                c
            }
        })
        .collect()
}
