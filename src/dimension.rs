//! Diameter and length extraction.
//!
//! Two patterns are tried in order:
//!
//! 1. `diameter <sep> length`, e.g. `2.5X100` or `6 х 40` (Latin and
//!    Cyrillic look-alikes are both separators). The first separator with a
//!    number on each side wins.
//! 2. `length <unit>`, e.g. `150мм`. Every occurrence of every unit marker
//!    is scanned and the last one in marker order wins, even when that last
//!    scan finds nothing.

use crate::config::ParserConfig;
use crate::errors::ExtractResult;
use crate::scanner::{scan_number, Direction, ScannedNumber};

/// Which pattern produced a set of dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionSource {
    /// A separator character between diameter and length.
    Separator { at: usize, separator: char },
    /// A unit marker following the length.
    UnitMarker { at: usize, marker: String },
}

/// Dimensions extracted from a title, with their character spans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimensions {
    pub diameter: Option<ScannedNumber>,
    pub length: Option<ScannedNumber>,
    pub source: Option<DimensionSource>,
}

impl Dimensions {
    pub fn diameter_value(&self) -> Option<f64> {
        self.diameter.map(|n| n.value)
    }

    pub fn length_value(&self) -> Option<f64> {
        self.length.map(|n| n.value)
    }
}

/// Extract diameter and length from `title`.
///
/// A separator with only one side numeric is discarded. When no separator
/// yields both numbers, only the length is looked for.
pub fn extract_dimensions(title: &str, config: &ParserConfig) -> ExtractResult<Dimensions> {
    let chars: Vec<char> = title.chars().collect();

    for (at, &ch) in chars.iter().enumerate() {
        if !config.is_separator(ch) {
            continue;
        }
        let diameter = scan_number(&chars, at, Direction::Backward)?;
        let length = scan_number(&chars, at, Direction::Forward)?;
        if diameter.is_some() && length.is_some() {
            tracing::debug!(at, separator = %ch, "dimensions from separator");
            return Ok(Dimensions {
                diameter,
                length,
                source: Some(DimensionSource::Separator { at, separator: ch }),
            });
        }
    }

    extract_length(title, &chars, config)
}

fn extract_length(
    title: &str,
    chars: &[char],
    config: &ParserConfig,
) -> ExtractResult<Dimensions> {
    let mut dimensions = Dimensions::default();

    for marker in config.unit_markers.iter().filter(|m| !m.is_empty()) {
        for (byte_idx, _) in title.match_indices(marker.as_str()) {
            let at = title[..byte_idx].chars().count();
            let length = scan_number(chars, at, Direction::Backward)?;
            dimensions.source = length.map(|_| DimensionSource::UnitMarker {
                at,
                marker: marker.clone(),
            });
            dimensions.length = length;
        }
    }

    if let Some(source) = &dimensions.source {
        tracing::debug!(?source, "length from unit marker");
    }

    Ok(dimensions)
}
