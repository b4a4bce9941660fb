//! Compiled-in vocabularies for color normalization.
//!
//! All tables are read-only and shared by every parse. Tables whose order
//! matters are slices of `(pattern, replacement)` rules rather than maps,
//! because abbreviated shades overlap ("т-" against "темн-", "яр." against
//! "яр.-") and are applied in exactly the order listed here.

use once_cell::sync::Lazy;

/// Canonical base color names. A token matches when its shade-stripped form
/// is a substring of one of these.
pub const SIMPLE_COLORS: &[&str] = &[
    "серый",
    "черный",
    "белый",
    "красный",
    "желтый",
    "зеленый",
    "синий",
    "фиолетовый",
    "пурпурный",
    "оранжевый",
    "коричневый",
    "хаки",
    "ультрамарин",
    "хром",
    "золотой",
    "бронзовый",
    "голубой",
    "слоновая кость",
    "синяя вода",
    "шоколадный",
    "красное вино",
];

/// Shade modifiers, written without the joining hyphen.
pub const SHADES: &[&str] = &[
    "темно",
    "светло",
    "земельно",
    "шоколадно",
    "ярко",
    "рубиново",
    "небесно",
    "винно",
];

/// Abbreviated shades and their canonical expansions, in application order.
pub const SHORT_SHADES: &[(&str, &str)] = &[
    ("т-", "темно-"),
    ("т.", "темно"),
    ("темн-", "темно"),
    ("темн.", "темно"),
    ("с-", "светло"),
    ("с.", "светло"),
    ("свет-", "светло-"),
    ("свет.", "светло"),
    ("св.", "светло"),
    ("св-", "светло-"),
    ("яр.", "ярко"),
    ("яр-", "ярко-"),
    ("яр.-", "ярко-"),
    ("слон.", "слоновая"),
];

/// Multi-word colors whose words are rejoined after tokenization.
pub const COMPLEX_COLORS: &[&str] = &["слоновая кость", "синяя вода", "красное вино"];

/// Tokens that look like shade abbreviations but are not colors ("гол." is
/// a head, not "голубой").
pub const NOT_COLOR: &[&str] = &["гол."];

/// Known misspellings and material names mapped to their color adjective.
pub const TYPOS: &[(&str, &str)] = &[
    ("золото", "золотой"),
    ("бронза", "бронзовый"),
    ("серебро", "серебряный"),
];

/// Marker appended after the colors when the title says "saturated".
pub const SATURATED: &str = "насыщенный";

/// Marker appended after the colors when the title mentions zinc coating.
pub const ZINC: &str = "цинк";

/// Rules rewriting an abbreviated shade followed by a space into its
/// punctuation-free form, e.g. `"св. "` to `"св "`. Applied before
/// [`SHORT_SHADES`] expansion.
pub static SHORT_SHADES_BARE: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    SHORT_SHADES
        .iter()
        .map(|(short, _)| {
            let bare: String = short.chars().filter(|c| !c.is_ascii_punctuation()).collect();
            (format!("{} ", short), format!("{} ", bare))
        })
        .collect()
});

/// Whether `word` is exactly one of the [`SHADES`].
pub fn is_shade(word: &str) -> bool {
    SHADES.contains(&word)
}

/// Shade prefix of `word`, in its hyphenated form ("темно-").
pub fn shade_prefix(word: &str) -> Option<String> {
    SHADES
        .iter()
        .filter(|sh| word.starts_with(*sh))
        .last()
        .map(|sh| format!("{}-", sh))
}

/// Remove every shade occurrence and hyphen from `word`.
///
/// Removal of one shade can expose another ("тем" + "темно" + "но"), so
/// hyphenated words get a second pass.
pub fn strip_shades(word: &str) -> String {
    let mut word = word.to_string();
    for sh in SHADES {
        word = word.replace(sh, "");
    }
    for sh in SHADES {
        if word.contains('-') {
            word = word.replace(sh, "");
        }
    }
    word.replace('-', "")
}

/// First canonical simple color containing `residual`.
pub fn canonical_color(residual: &str) -> Option<&'static str> {
    SIMPLE_COLORS.iter().copied().find(|c| c.contains(residual))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_forms_drop_ascii_punctuation() {
        let bare: Vec<&str> = SHORT_SHADES_BARE.iter().map(|(_, b)| b.as_str()).collect();
        assert_eq!(bare[0], "т ");
        assert_eq!(bare[12], "яр ");
        assert_eq!(bare[13], "слон ");
        assert_eq!(SHORT_SHADES_BARE[8].0, "св. ");
    }

    #[test]
    fn strip_shades_removes_prefix_and_hyphen() {
        assert_eq!(strip_shades("темно-синий"), "синий");
        assert_eq!(strip_shades("ярко-желтый"), "желтый");
        assert_eq!(strip_shades("синий"), "синий");
        assert_eq!(strip_shades("-"), "");
    }

    #[test]
    fn shade_prefix_is_hyphenated() {
        assert_eq!(shade_prefix("светло-серый").as_deref(), Some("светло-"));
        assert_eq!(shade_prefix("серый"), None);
    }

    #[test]
    fn canonical_color_is_first_containing_entry() {
        assert_eq!(canonical_color("син"), Some("синий"));
        assert_eq!(canonical_color("вода"), Some("синяя вода"));
        assert_eq!(canonical_color("зелен"), Some("зеленый"));
        assert_eq!(canonical_color("серебряный"), None);
    }
}
