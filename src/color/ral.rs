//! RAL code fallback.

use crate::scanner::is_digit;

/// Find the first `RAL <digits>` code in `title`.
///
/// Hyphens and opening parentheses count as spaces, so "RAL-9005" and
/// "(RAL 9005 )" are recognized. Closing punctuation stays attached to the
/// code, so "(RAL 9005)" is not.
pub fn find_ral(title: &str) -> Option<String> {
    let lower = title.to_lowercase();
    if !lower.contains("ral") {
        return None;
    }

    let normalized = lower.replace('-', " ").replace('(', " ");
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let code = words
        .windows(2)
        .find(|pair| pair[0] == "ral" && is_numeric_token(pair[1]))
        .map(|pair| pair[1])?;

    tracing::debug!(code, "color from RAL code");
    Some(format!("RAL {}", code))
}

fn is_numeric_token(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_code() {
        assert_eq!(find_ral("RAL-9005 panel").as_deref(), Some("RAL 9005"));
    }

    #[test]
    fn parenthesized_code() {
        assert_eq!(find_ral("Профиль (RAL 7024 )").as_deref(), Some("RAL 7024"));
        assert_eq!(find_ral("Профиль (RAL 7024)"), None);
    }

    #[test]
    fn first_code_wins() {
        assert_eq!(find_ral("ral 1015 / ral 3005").as_deref(), Some("RAL 1015"));
    }

    #[test]
    fn code_must_be_numeric_and_separate() {
        assert_eq!(find_ral("RAL9005"), None);
        assert_eq!(find_ral("ral 9005)"), None);
        assert_eq!(find_ral("natural 9005"), None);
        assert_eq!(find_ral("ral"), None);
    }

    #[test]
    fn fractions_are_not_codes() {
        assert_eq!(find_ral("ral ½ panel"), None);
        assert_eq!(find_ral("ral Ⅻ"), None);
    }
}
