use serde::Serialize;

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// One withdrawal parsed out of a bank export. Immutable after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankTransaction {
    /// Calendar date in display form `YYYY/MM/DD`.
    pub date: String,
    /// Vendor text as extracted from the statement (normalized).
    pub raw_description: String,
    /// Withdrawal magnitude in yen, always positive.
    pub amount: i64,
}

// ---------------------------------------------------------------------------
// Source shapes
// ---------------------------------------------------------------------------

/// The supported export layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceShape {
    /// Header-labelled columns (date / signed amount / description).
    Columnar,
    /// Zengin-style fixed-field records with a record-type sentinel.
    FixedField,
    /// Line-oriented text recovered from a scanned statement.
    FreeText,
}

impl std::fmt::Display for SourceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Columnar => write!(f, "columnar"),
            Self::FixedField => write!(f, "fixed_field"),
            Self::FreeText => write!(f, "free_text"),
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub shape: SourceShape,
    pub transactions: Vec<BankTransaction>,
    /// Rows/lines that looked like data but failed a parsing step.
    pub skipped: usize,
}

#[derive(Debug)]
pub enum ExtractError {
    /// Columnar layout requested or detected, but the date/amount/description
    /// headers were not all found. Carries the header labels that were seen.
    MissingColumns { found: Vec<String> },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumns { found } => write!(
                f,
                "date/amount/description columns not found (headers: {})",
                found.join(", ")
            ),
        }
    }
}

impl std::error::Error for ExtractError {}
