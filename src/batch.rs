//! Batch parsing of catalog records.
//!
//! Records are parsed in order, each title independently: a fault in one
//! title leaves that record with default attributes and the batch goes on.
//! Only the caller's [`CancellationFlag`] stops a batch early.

use crate::errors::BatchError;
use crate::parser::TitleParser;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// An input catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub id: String,
    pub title: String,
}

impl TitleRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// An output record: `id, length, diameter, color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub id: String,
    pub length: Option<f64>,
    pub diameter: Option<f64>,
    pub color: String,
}

/// Shared flag for cancelling a running batch from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    /// Records with a length (with or without a diameter).
    pub with_dimensions: usize,
    pub with_color: usize,
    pub faults: usize,
}

/// Parsed records in input order, with their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    pub records: Vec<AttributeRecord>,
    pub summary: BatchSummary,
}

/// Parse every record, stopping only when `cancel` is raised.
pub fn parse_records<I>(
    parser: &TitleParser,
    records: I,
    cancel: &CancellationFlag,
) -> Result<BatchOutput, BatchError>
where
    I: IntoIterator<Item = TitleRecord>,
{
    let mut output = Vec::new();
    let mut summary = BatchSummary::default();
    tracing::info!("parsing batch");

    for record in records {
        if cancel.is_cancelled() {
            tracing::warn!(processed = summary.total, "batch cancelled");
            return Err(BatchError::Cancelled {
                processed: summary.total,
            });
        }

        let outcome = parser.parse_outcome(&record.title);
        summary.total += 1;
        if outcome.attributes.length.is_some() {
            summary.with_dimensions += 1;
        }
        if !outcome.attributes.color.is_empty() {
            summary.with_color += 1;
        }
        if outcome.fault.is_some() {
            summary.faults += 1;
        }

        let attributes = outcome.attributes;
        output.push(AttributeRecord {
            id: record.id,
            length: attributes.length,
            diameter: attributes.diameter,
            color: attributes.color,
        });
    }

    tracing::info!(
        total = summary.total,
        with_dimensions = summary.with_dimensions,
        with_color = summary.with_color,
        faults = summary.faults,
        "batch parsed"
    );

    Ok(BatchOutput {
        records: output,
        summary,
    })
}
