#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Attribute extraction from catalog product titles.
//!
//! Product titles in a Cyrillic-dominant hardware catalog carry their
//! dimensions and color as free text: `"Саморез 4,2х19 т.-синий цинк"`.
//! This crate pulls out three attributes per title:
//!
//! - **diameter** and **length**, from a `diameter × length` pattern or a
//!   length followed by a millimeter marker
//! - **color**, normalized against compiled-in vocabularies of base colors,
//!   shades, abbreviations and typos, with a RAL code fallback
//!
//! Parsing is best-effort: a title without a recognizable pattern yields
//! missing values, and a fault in one title never stops a batch.
//!
//! ## Modules
//!
//! - [`vocabulary`] - Color, shade, abbreviation and typo tables
//! - [`scanner`] - Numeric token scanning around an anchor character
//! - [`dimension`] - Diameter and length extraction
//! - [`color`] - Color normalization pipeline and RAL fallback
//! - [`parser`] - Per-title orchestration with fault isolation
//! - [`batch`] - Ordered batch parsing with cancellation
//! - [`config`] - Parser configuration
//! - [`display`] - Span rendering for diagnostics and snapshot tests
//!
//! ## Example
//!
//! ```
//! use layered_attributes::parse_title;
//!
//! let attrs = parse_title("Wire 2.5X100mm темно-синий цинк");
//! assert_eq!(attrs.diameter, Some(2.5));
//! assert_eq!(attrs.length, Some(100.0));
//! assert_eq!(attrs.color, "темно-синий цинк");
//! ```

pub mod batch;
pub mod color;
pub mod config;
pub mod dimension;
pub mod display;
pub mod errors;
pub mod parser;
pub mod scanner;
pub mod vocabulary;

pub use batch::{
    parse_records, AttributeRecord, BatchOutput, BatchSummary, CancellationFlag, TitleRecord,
};
pub use color::extract_color;
pub use config::ParserConfig;
pub use dimension::{extract_dimensions, DimensionSource, Dimensions};
pub use display::TitleDisplay;
pub use errors::{BatchError, ConfigError, ExtractError, ExtractResult};
pub use parser::{parse_title, ParsedAttributes, TitleOutcome, TitleParser};
pub use scanner::{scan_number, Direction, ScannedNumber};

#[cfg(test)]
mod tests;
