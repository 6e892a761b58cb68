//! `keshikomi-extract` — turn decoded bank export rows into structured
//! withdrawal transactions.
//!
//! One extractor, three source shapes: a columnar ledger export (headers
//! located by keyword), the Zengin fixed-field interbank layout (record-type
//! sentinel, era-encoded dates), and a free-text fallback for OCR-recovered
//! statements. A row that fails to parse is skipped and counted, never
//! aborts the batch.

pub mod columnar;
pub mod config;
pub mod freetext;
pub mod model;
pub mod zengin;

use keshikomi_io::BankFile;

pub use config::ExtractConfig;
pub use model::{BankTransaction, ExtractError, ExtractReport, SourceShape};

/// Extract transactions from a decoded bank file.
///
/// With `shape == None` the source shape is detected: a row of recognizable
/// column headers means columnar, data-record sentinel rows mean the Zengin
/// fixed-field layout, anything else falls back to line-oriented free text.
pub fn extract(
    file: &BankFile,
    shape: Option<SourceShape>,
    config: &ExtractConfig,
) -> Result<ExtractReport, ExtractError> {
    let shape = shape.unwrap_or_else(|| detect_shape(file, config));

    let (transactions, skipped) = match shape {
        SourceShape::Columnar => columnar::extract(file, config)?,
        SourceShape::FixedField => zengin::extract(file, config),
        SourceShape::FreeText => freetext::extract(file, config),
    };

    Ok(ExtractReport {
        shape,
        transactions,
        skipped,
    })
}

fn detect_shape(file: &BankFile, config: &ExtractConfig) -> SourceShape {
    if columnar::find_columns(file, config).is_some() {
        return SourceShape::Columnar;
    }
    if zengin::has_data_records(file) {
        return SourceShape::FixedField;
    }
    SourceShape::FreeText
}
