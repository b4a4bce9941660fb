//! Error types for attribute extraction.
//!
//! Unrecognizable titles are not errors; they yield empty attributes.
//! The variants here describe faults while processing a single title,
//! configuration loading problems, and batch cancellation.

use thiserror::Error;

/// Faults raised while extracting attributes from one title.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// Numeral characters were collected but do not form a decimal number.
    #[error("invalid number {text:?}")]
    InvalidNumber { text: String },

    /// A word marked for compound rejoining was missing from the color list.
    #[error("complex color word {word:?} is not in the color list")]
    ComplexColorMismatch { word: String },
}

/// Result type for per-title extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while loading a [`ParserConfig`](crate::ParserConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config: {path}: {message}")]
    Parse { path: String, message: String },
}

/// Errors that abort a whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// The caller raised the cancellation flag.
    #[error("batch cancelled after {processed} titles")]
    Cancelled { processed: usize },
}
