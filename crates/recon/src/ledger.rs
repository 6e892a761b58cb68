//! Load accounts-payable rows from the ledger sheet.
//!
//! Column labels vary by sheet vintage, so the three required columns are
//! found by keyword: one containing "Status", one containing "Vendor", and
//! one containing both "FB" and "Amount".

use keshikomi_text::parse_amount;

use crate::error::ReconError;
use crate::model::{InvoiceStatus, LedgerInvoice};

/// Parse ledger rows into invoices. Returns the invoices plus the number of
/// rows skipped for an unparseable amount.
pub fn load_invoices(rows: &[Vec<String>]) -> Result<(Vec<LedgerInvoice>, usize), ReconError> {
    let headers: Vec<String> = rows
        .first()
        .ok_or_else(|| ReconError::EmptyTable("ledger".into()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let status_col = headers.iter().position(|h| h.contains("Status"));
    let vendor_col = headers.iter().position(|h| h.contains("Vendor"));
    let amount_col = headers
        .iter()
        .position(|h| h.contains("FB") && h.contains("Amount"));

    let mut missing = Vec::new();
    if status_col.is_none() {
        missing.push("Status".to_string());
    }
    if vendor_col.is_none() {
        missing.push("Vendor".to_string());
    }
    if amount_col.is_none() {
        missing.push("FB Amount".to_string());
    }
    if !missing.is_empty() {
        return Err(ReconError::MissingColumns {
            table: "ledger".into(),
            missing,
            found: headers,
        });
    }
    let (status_col, vendor_col, amount_col) =
        (status_col.unwrap(), vendor_col.unwrap(), amount_col.unwrap());

    let mut invoices = Vec::new();
    let mut skipped = 0usize;

    for row in &rows[1..] {
        let vendor_name = row
            .get(vendor_col)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        let status = InvoiceStatus::parse(row.get(status_col).map(String::as_str).unwrap_or(""));

        let Some(paid_amount) = row.get(amount_col).and_then(|a| parse_amount(a)) else {
            skipped += 1;
            continue;
        };

        invoices.push(LedgerInvoice {
            vendor_name,
            paid_amount,
            status,
        });
    }

    Ok((invoices, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<&str>>) -> Vec<Vec<String>> {
        rows.into_iter()
            .map(|r| r.into_iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn loads_with_fuzzy_headers() {
        let rows = table(vec![
            vec!["Invoice Status", "Vendor Name", "FB Amount (¥)"],
            vec!["Paid", "Yasaka Taxi", "¥150,000"],
            vec!["Pending", "Kagaya", "3,000"],
        ]);
        let (invoices, skipped) = load_invoices(&rows).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].vendor_name, "Yasaka Taxi");
        assert_eq!(invoices[0].paid_amount, 150_000);
        assert_eq!(invoices[0].status, InvoiceStatus::Paid);
        assert_eq!(invoices[1].status, InvoiceStatus::Other);
    }

    #[test]
    fn missing_columns_surface_header_list() {
        let rows = table(vec![vec!["Status", "Vendor"], vec!["Paid", "Yasaka"]]);
        let err = load_invoices(&rows).unwrap_err();
        match err {
            ReconError::MissingColumns { missing, found, .. } => {
                assert_eq!(missing, vec!["FB Amount"]);
                assert_eq!(found, vec!["Status", "Vendor"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_amount_rows_skipped() {
        let rows = table(vec![
            vec!["Status", "Vendor", "FB Amount"],
            vec!["Paid", "Yasaka Taxi", "n/a"],
            vec!["Paid", "Kagaya", "3,000"],
        ]);
        let (invoices, skipped) = load_invoices(&rows).unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(matches!(
            load_invoices(&[]),
            Err(ReconError::EmptyTable(_))
        ));
    }
}
