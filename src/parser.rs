//! Title parsing: dimensions and color for one title.

use crate::color::extract_color;
use crate::config::ParserConfig;
use crate::dimension::{extract_dimensions, Dimensions};
use crate::errors::{ExtractError, ExtractResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static STANDARD_PARSER: Lazy<TitleParser> = Lazy::new(TitleParser::default);

/// Attributes extracted from one title.
///
/// Missing dimensions are `None`; a missing color is `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedAttributes {
    pub length: Option<f64>,
    pub diameter: Option<f64>,
    pub color: String,
}

/// Everything known about one parse, including a fault if one occurred.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleOutcome {
    pub attributes: ParsedAttributes,
    pub dimensions: Dimensions,
    pub fault: Option<ExtractError>,
}

/// Parses titles with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct TitleParser {
    config: ParserConfig,
}

impl TitleParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `title`, never failing: a fault is logged and whatever was
    /// extracted before it is returned.
    pub fn parse(&self, title: &str) -> ParsedAttributes {
        self.parse_outcome(title).attributes
    }

    /// Parse `title` and keep the dimension spans and any fault.
    pub fn parse_outcome(&self, title: &str) -> TitleOutcome {
        let mut outcome = TitleOutcome::default();
        if let Err(error) = self.fill(title, &mut outcome) {
            tracing::warn!(title = %title, %error, "failed to parse title");
            outcome.fault = Some(error);
        }
        outcome
    }

    fn fill(&self, title: &str, outcome: &mut TitleOutcome) -> ExtractResult<()> {
        let dimensions = extract_dimensions(title, &self.config)?;
        outcome.attributes.diameter = dimensions.diameter_value();
        outcome.attributes.length = dimensions.length_value();
        outcome.dimensions = dimensions;

        outcome.attributes.color = extract_color(title, &self.config)?;
        Ok(())
    }
}

/// Parse `title` with the standard configuration.
pub fn parse_title(title: &str) -> ParsedAttributes {
    STANDARD_PARSER.parse(title)
}
