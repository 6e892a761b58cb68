use std::collections::BTreeSet;

use keshikomi_extract::BankTransaction;
use keshikomi_text::{format_amount, normalize};

use crate::alias::{AliasTable, Resolution};
use crate::model::{InvoiceStatus, LedgerInvoice, MatchStatus, ReportRow};

#[derive(Debug)]
pub struct MatchOutcome {
    pub matched: Vec<ReportRow>,
    pub unmatched: Vec<ReportRow>,
    /// Distinct normalized descriptions with no alias hit this run.
    pub unknown_names: BTreeSet<String>,
}

/// Match transactions against Paid ledger invoices.
///
/// A transaction matches the first invoice whose vendor equals the resolved
/// canonical name and whose amount equals the transaction amount exactly —
/// no tolerance on either field. Invoices are not consumed: one invoice can
/// satisfy any number of transactions with the same vendor and amount (split
/// and repeat payments look identical on the bank side, so pairing is left
/// to the operator). Descriptions that resolve to `Unknown` always land in
/// `unmatched`. Matching never fails; absence of a match is a result.
pub fn reconcile(
    transactions: &[BankTransaction],
    invoices: &[LedgerInvoice],
    aliases: &AliasTable,
) -> MatchOutcome {
    let paid: Vec<&LedgerInvoice> = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Paid)
        .collect();

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    let mut unknown_names = BTreeSet::new();

    for tx in transactions {
        let resolution = aliases.resolve(&tx.raw_description);
        if resolution == Resolution::Unknown {
            unknown_names.insert(normalize(&tx.raw_description));
        }

        let hit = match &resolution {
            Resolution::Resolved(name) => paid
                .iter()
                .find(|inv| inv.vendor_name == *name && inv.paid_amount == tx.amount),
            Resolution::Unmapped | Resolution::Unknown => None,
        };

        let status = if hit.is_some() {
            MatchStatus::Match
        } else {
            MatchStatus::Missing
        };
        let row = ReportRow {
            date: tx.date.clone(),
            bank_description: tx.raw_description.clone(),
            resolved_name: resolution.display_name().to_string(),
            amount: tx.amount,
            amount_display: format_amount(tx.amount),
            status,
        };

        match status {
            MatchStatus::Match => matched.push(row),
            MatchStatus::Missing => unmatched.push(row),
        }
    }

    MatchOutcome {
        matched,
        unmatched,
        unknown_names,
    }
}
