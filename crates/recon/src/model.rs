use serde::Serialize;

// ---------------------------------------------------------------------------
// Ledger side
// ---------------------------------------------------------------------------

/// One accounts-payable row, read-only to this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerInvoice {
    pub vendor_name: String,
    pub paid_amount: i64,
    pub status: InvoiceStatus,
}

/// Only `Paid` invoices participate in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Other,
}

impl InvoiceStatus {
    pub fn parse(label: &str) -> Self {
        if label.trim() == "Paid" {
            Self::Paid
        } else {
            Self::Other
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Match,
    Missing,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// One transaction's reconciliation outcome, display-ready.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: String,
    /// Vendor text as it came off the bank statement.
    pub bank_description: String,
    /// Canonical ledger name, or the `Unknown` sentinel.
    pub resolved_name: String,
    pub amount: i64,
    pub amount_display: String,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub transactions: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub unknown_names: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconReport {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub matched: Vec<ReportRow>,
    pub unmatched: Vec<ReportRow>,
    /// Distinct normalized descriptions with no alias hit, sorted.
    pub unknown_names: Vec<String>,
}
