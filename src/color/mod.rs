//! Color normalization.
//!
//! Titles name colors loosely: abbreviated shades ("т.-синий"), plural
//! adjectives ("синие"), materials ("золото"), multi-word colors split by
//! other words, and marker words such as "цинк". Normalization prepares the
//! text (see [`prepare()`]), picks the color words out of the tokens, and
//! rewrites them into canonical names from the vocabulary:
//!
//! ```text
//! "Болт т-синий цинк" -> "темно-синий цинк"
//! "Краска желтые насыщенный" -> "желтый насыщенный"
//! "RAL-9005 panel" -> "RAL 9005"
//! ```

pub mod prepare;
pub mod ral;

use crate::config::ParserConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::vocabulary::{
    canonical_color, is_shade, shade_prefix, strip_shades, COMPLEX_COLORS, SATURATED,
    SIMPLE_COLORS, ZINC,
};

pub use prepare::prepare;
pub use ral::find_ral;

/// Extract the normalized color name from `title`, or `""` when none is found.
pub fn extract_color(title: &str, config: &ParserConfig) -> ExtractResult<String> {
    let prepared = prepare(title);
    let words: Vec<&str> = prepared.split_whitespace().collect();

    let has_zinc = words.contains(&ZINC);
    let has_saturated = words.contains(&SATURATED);

    let mut shade = None;
    let mut color_words = Vec::new();
    for &word in &words {
        if shade.is_none() && is_shade(word) {
            shade = Some(format!("{}-", word));
        }
        if is_color_word(word) {
            color_words.push(word);
        }
    }

    let colors = join_complex(&color_words, COMPLEX_COLORS)?;
    let color = initial_form(&colors, shade, has_zinc, has_saturated);

    if color.is_empty() && config.ral_fallback {
        return Ok(find_ral(title).unwrap_or_default());
    }
    Ok(color)
}

/// Whether `word`, stripped of shades, is a fragment of a simple color
/// longer than two characters.
pub fn is_color_word(word: &str) -> bool {
    let residual = strip_shades(word);
    residual.chars().count() > 2
        && SIMPLE_COLORS
            .iter()
            .any(|c| c.contains(residual.as_str()))
}

/// Move the words belonging to multi-word colors to the end of the list,
/// joined into one space-separated token.
fn join_complex(words: &[&str], complex: &[&str]) -> ExtractResult<Vec<String>> {
    let mut colors: Vec<String> = words.iter().map(|w| w.to_string()).collect();

    let mut joined = Vec::new();
    for &word in words {
        for cc in complex {
            if cc.contains(word) {
                joined.push(word);
            }
        }
    }

    for &word in &joined {
        let idx = colors
            .iter()
            .position(|c| c == word)
            .ok_or_else(|| ExtractError::ComplexColorMismatch {
                word: word.to_string(),
            })?;
        colors.remove(idx);
    }

    if !joined.is_empty() {
        colors.push(joined.join(" "));
    }
    Ok(colors)
}

/// Build the final color string: shade, canonical colors, then markers.
///
/// A shade already taken from a standalone shade word is kept; otherwise the
/// first color with a shade prefix provides it. A shade with nothing after
/// it is dropped, and "насыщенный" is only appended after a color.
fn initial_form(
    colors: &[String],
    mut shade: Option<String>,
    has_zinc: bool,
    has_saturated: bool,
) -> String {
    let mut canonical = Vec::new();
    for color in colors {
        if shade.is_none() {
            shade = shade_prefix(color);
        }
        if let Some(name) = canonical_color(&strip_shades(color)) {
            canonical.push(name);
        }
    }

    let mut main = canonical.join(" ");
    if has_zinc {
        main.push(' ');
        main.push_str(ZINC);
    }
    if main.is_empty() {
        shade = None;
    }
    if has_saturated && !main.is_empty() {
        main.push(' ');
        main.push_str(SATURATED);
    }

    format!("{}{}", shade.unwrap_or_default(), main)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_word_classification() {
        assert!(is_color_word("синий"));
        assert!(is_color_word("темно-синий"));
        assert!(is_color_word("красн"));
        assert!(!is_color_word("темно"));
        assert!(!is_color_word("си"));
        assert!(!is_color_word("цинк"));
    }

    #[test]
    fn complex_words_are_rejoined_in_order() {
        let colors = join_complex(&["кость", "белый", "слоновая"], COMPLEX_COLORS).unwrap();
        assert_eq!(colors, vec!["белый", "кость слоновая"]);
    }

    #[test]
    fn word_shared_by_two_complex_colors_is_a_fault() {
        let err = join_complex(&["вода"], &["синяя вода", "морская вода"]).unwrap_err();
        assert_eq!(
            err,
            ExtractError::ComplexColorMismatch {
                word: "вода".to_string()
            }
        );
    }

    #[test]
    fn initial_form_markers() {
        let colors = vec!["желтый".to_string()];
        assert_eq!(initial_form(&colors, None, true, true), "желтый цинк насыщенный");
        assert_eq!(initial_form(&[], Some("темно-".into()), false, true), "");
        assert_eq!(initial_form(&[], None, true, false), "цинк");
    }

    #[test]
    fn standalone_shade_beats_prefix() {
        let colors = vec!["ярко-красный".to_string()];
        assert_eq!(
            initial_form(&colors, Some("темно-".into()), false, false),
            "темно-красный"
        );
        assert_eq!(initial_form(&colors, None, false, false), "ярко-красный");
    }
}
