//! Parser configuration.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the title parser.
///
/// Color vocabularies are compiled in; only the dimension markers and the
/// RAL fallback are adjustable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Characters separating diameter and length ("2.5x100").
    pub separators: Vec<char>,
    /// Millimeter markers for the length-only pattern, scanned in this order.
    pub unit_markers: Vec<String>,
    /// Fall back to a RAL code when no named color is found.
    pub ral_fallback: bool,
}

impl ParserConfig {
    /// Latin and Cyrillic look-alike separators, both millimeter spellings.
    pub fn standard() -> Self {
        Self {
            separators: vec!['*', 'X', 'x', 'х', 'Х', '/'],
            unit_markers: vec!["мм".into(), "mm".into()],
            ral_fallback: true,
        }
    }

    /// Parse a configuration from TOML text. Missing keys keep their
    /// standard values.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from a TOML file. A missing file yields the standard configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::standard());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub(crate) fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(&ch)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::standard()
    }
}
