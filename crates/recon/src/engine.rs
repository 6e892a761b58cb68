use keshikomi_extract::BankTransaction;

use crate::alias::AliasTable;
use crate::matcher::reconcile;
use crate::model::{LedgerInvoice, ReconMeta, ReconReport, ReconSummary};

/// Run one reconciliation pass and assemble the report.
pub fn run(
    transactions: &[BankTransaction],
    invoices: &[LedgerInvoice],
    aliases: &AliasTable,
) -> ReconReport {
    let outcome = reconcile(transactions, invoices, aliases);

    let summary = ReconSummary {
        transactions: transactions.len(),
        matched: outcome.matched.len(),
        unmatched: outcome.unmatched.len(),
        unknown_names: outcome.unknown_names.len(),
    };

    ReconReport {
        meta: ReconMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        matched: outcome.matched,
        unmatched: outcome.unmatched,
        unknown_names: outcome.unknown_names.into_iter().collect(),
    }
}
