//! Numeric token scanning around an anchor character.
//!
//! The scanner walks away from an anchor (a separator such as `x`, or the
//! first letter of a unit marker) and collects a decimal numeral: numeric
//! characters plus at most one `,` or `.` after the first digit.
//!
//! ```text
//! Wire 2.5X100mm
//!      ◀──X──▶
//! ```

use crate::errors::{ExtractError, ExtractResult};

/// Which way the scanner walks from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A number read from a title, with the character span it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScannedNumber {
    pub value: f64,
    /// Inclusive start character index
    pub start: usize,
    /// Exclusive end character index
    pub end: usize,
}

/// Scan a number next to `anchor` in `chars`, walking in `direction`.
///
/// A single ASCII space directly beside the anchor is skipped, but only when
/// it lies strictly inside the text. Returns `Ok(None)` when no digit is
/// found immediately, including when the walk starts outside the text.
/// Decimal digits of any script are read by value ("٣" is 3). Digits
/// without a decimal value (superscripts, circled digits) are collected but
/// reported as [`ExtractError::InvalidNumber`]. Fractions and Roman
/// numerals are not digits and end the scan.
pub fn scan_number(
    chars: &[char],
    anchor: usize,
    direction: Direction,
) -> ExtractResult<Option<ScannedNumber>> {
    let step = direction.step();
    let len = chars.len() as isize;
    let mut anchor = anchor as isize;

    let beside = anchor + step;
    if 0 < beside && beside < len && chars[beside as usize] == ' ' {
        anchor = beside;
    }

    let mut collected = String::new();
    let mut seen_digit = false;
    let mut seen_separator = false;
    let mut pos = anchor + step;

    while 0 <= pos && pos < len {
        let ch = chars[pos as usize];
        if is_digit(ch) {
            seen_digit = true;
            collected.push(ch);
        } else if (ch == ',' || ch == '.') && seen_digit && !seen_separator {
            seen_separator = true;
            collected.push('.');
        } else {
            break;
        }
        pos += step;
    }

    if collected.is_empty() {
        return Ok(None);
    }

    let (start, end) = match direction {
        Direction::Forward => (anchor + 1, pos),
        Direction::Backward => {
            collected = collected.chars().rev().collect();
            (pos + 1, anchor)
        }
    };

    let invalid = || ExtractError::InvalidNumber {
        text: collected.clone(),
    };
    let ascii = collected
        .chars()
        .map(|ch| match ch {
            '.' => Some('.'),
            _ => decimal_value(ch).and_then(|d| char::from_digit(d, 10)),
        })
        .collect::<Option<String>>()
        .ok_or_else(invalid)?;
    let value = ascii.parse::<f64>().map_err(|_| invalid())?;

    Ok(Some(ScannedNumber {
        value,
        start: start as usize,
        end: end as usize,
    }))
}

/// Code points of the zero digit of each decimal digit run (general
/// category Nd) in the Basic Multilingual Plane.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Digits that have no decimal value: superscripts, subscripts, circled,
/// parenthesized and full-stop digits.
const NON_DECIMAL_DIGITS: &[(char, char)] = &[
    ('²', '³'),
    ('¹', '¹'),
    ('⁰', '⁰'),
    ('⁴', '⁹'),
    ('₀', '₉'),
    ('①', '⑨'),
    ('⑴', '⑼'),
    ('⒈', '⒐'),
    ('⓪', '⓪'),
    ('⓵', '⓽'),
    ('⓿', '⓿'),
    ('❶', '❾'),
    ('➀', '➈'),
    ('➊', '➒'),
];

/// Value of a decimal digit in any script.
pub(crate) fn decimal_value(ch: char) -> Option<u32> {
    let code = ch as u32;
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|zero| code - zero)
}

/// Whether `ch` is a digit: a decimal digit, or one of the superscript-like
/// digit forms. Fractions ("½") and Roman numerals ("Ⅻ") are not digits.
pub(crate) fn is_digit(ch: char) -> bool {
    decimal_value(ch).is_some()
        || NON_DECIMAL_DIGITS
            .iter()
            .any(|&(first, last)| (first..=last).contains(&ch))
}
