//! Columnar ledger export: date, signed amount and description columns
//! located by header keyword, withdrawals kept as positive magnitudes.

use keshikomi_io::BankFile;
use keshikomi_text::{normalize, parse_amount};
use regex::Regex;

use crate::config::ExtractConfig;
use crate::model::{BankTransaction, ExtractError};

/// Located header row and column positions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Columns {
    pub header_row: usize,
    pub date: usize,
    pub amount: usize,
    pub description: usize,
}

/// How many leading rows to scan for the header (exports often carry an
/// account-summary preamble).
const HEADER_SCAN_ROWS: usize = 10;

/// Locate the header row: the first row where all three keyword classes hit.
pub(crate) fn find_columns(file: &BankFile, config: &ExtractConfig) -> Option<Columns> {
    for (row_idx, row) in file.rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let labels: Vec<String> = row.iter().map(|h| h.trim().to_string()).collect();
        let date = find_label(&labels, &config.date_headers);
        let amount = find_label(&labels, &config.amount_headers);
        let description = find_label(&labels, &config.description_headers);
        if let (Some(date), Some(amount), Some(description)) = (date, amount, description) {
            return Some(Columns {
                header_row: row_idx,
                date,
                amount,
                description,
            });
        }
    }
    None
}

fn find_label(labels: &[String], keywords: &[String]) -> Option<usize> {
    labels.iter().position(|label| {
        let label = label.to_lowercase();
        keywords.iter().any(|k| label.contains(&k.to_lowercase()))
    })
}

pub(crate) fn extract(
    file: &BankFile,
    config: &ExtractConfig,
) -> Result<(Vec<BankTransaction>, usize), ExtractError> {
    let cols = find_columns(file, config).ok_or_else(|| ExtractError::MissingColumns {
        found: file.headers(),
    })?;

    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for row in &file.rows[cols.header_row + 1..] {
        match parse_row(row, &cols, config) {
            RowOutcome::Keep(tx) => transactions.push(tx),
            RowOutcome::Drop => {}
            RowOutcome::Fail => skipped += 1,
        }
    }

    Ok((transactions, skipped))
}

enum RowOutcome {
    Keep(BankTransaction),
    /// Deposit or configured noise — dropped by design, not a failure.
    Drop,
    Fail,
}

fn parse_row(row: &[String], cols: &Columns, config: &ExtractConfig) -> RowOutcome {
    let Some(date) = row.get(cols.date).and_then(|f| parse_date(f)) else {
        return RowOutcome::Fail;
    };

    let Some(signed) = row.get(cols.amount).and_then(|f| parse_amount(f)) else {
        return RowOutcome::Fail;
    };
    // Withdrawals are negative in this layout; deposits are irrelevant here.
    if signed >= 0 {
        return RowOutcome::Drop;
    }
    let amount = -signed;

    let description = match row.get(cols.description) {
        Some(f) => normalize(f),
        None => return RowOutcome::Fail,
    };
    if description.is_empty() {
        return RowOutcome::Fail;
    }
    if config
        .skip_keywords
        .iter()
        .any(|k| description.contains(k.as_str()))
    {
        return RowOutcome::Drop;
    }

    let vendor = extract_vendor(&description, config);
    if vendor.is_empty() {
        return RowOutcome::Fail;
    }

    RowOutcome::Keep(BankTransaction {
        date,
        raw_description: vendor,
        amount,
    })
}

/// Accept a structured date (`2025/11/4`, `2025-11-04`, with optional time
/// suffix) or an 8-digit numeral (`20251104`); render `YYYY/MM/DD`.
fn parse_date(field: &str) -> Option<String> {
    let token = field.trim().split_whitespace().next()?;

    if token.len() == 8 && token.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = token[0..4].parse().ok()?;
        let month: u32 = token[4..6].parse().ok()?;
        let day: u32 = token[6..8].parse().ok()?;
        return format_ymd(year, month, day);
    }

    let parts: Vec<&str> = token.split(['/', '-', '.']).collect();
    if parts.len() != 3 {
        return None;
    }
    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;
    if parts[0].len() != 4 {
        return None;
    }
    format_ymd(year, month, day)
}

fn format_ymd(year: i32, month: u32, day: u32) -> Option<String> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{year:04}/{month:02}/{day:02}"))
}

/// Pull the vendor name out of a normalized transfer description.
///
/// Rules, in order: drop a trailing requester annotation; everything after a
/// 7-digit reference number; skip the institution/branch/type/reference
/// prefix when the text opens with a financial-institution token; otherwise
/// the cleaned description itself.
fn extract_vendor(description: &str, config: &ExtractConfig) -> String {
    let requester = Regex::new(r"\s*\(依頼人.*$").unwrap();
    let description = requester.replace(description, "");
    let description = description.trim();

    // 7-digit account/reference number followed by whitespace anchors the
    // vendor name: everything after it.
    let reference = Regex::new(r"(?:^|[^0-9])[0-9]{7}\s+").unwrap();
    if let Some(m) = reference.find(description) {
        let tail = description[m.end()..].trim();
        if !tail.is_empty() {
            return tail.to_string();
        }
    }

    let tokens: Vec<&str> = description.split_whitespace().collect();
    if tokens.len() > 4 && starts_with_institution(tokens[0], config) {
        return tokens[4..].join(" ");
    }

    description.to_string()
}

fn starts_with_institution(token: &str, config: &ExtractConfig) -> bool {
    let token = token.to_lowercase();
    config
        .institution_markers
        .iter()
        .any(|m| token.contains(&m.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keshikomi_io::FileFormat;

    fn bank_file(rows: Vec<Vec<&str>>) -> BankFile {
        BankFile {
            format: FileFormat::Utf8Text,
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(|f| f.to_string()).collect())
                .collect(),
            text: None,
        }
    }

    fn config() -> ExtractConfig {
        ExtractConfig::default()
    }

    #[test]
    fn header_found_past_preamble() {
        let file = bank_file(vec![
            vec!["口座番号", "1234567"],
            vec![" 取引日 ", "入出金(円)", "入出金先内容"],
            vec!["2025/11/4", "-150,000", "ヤサカ"],
        ]);
        let cols = find_columns(&file, &config()).unwrap();
        assert_eq!(cols.header_row, 1);
        assert_eq!((cols.date, cols.amount, cols.description), (0, 1, 2));
    }

    #[test]
    fn missing_headers_is_fatal_with_found_labels() {
        let file = bank_file(vec![vec!["A", "B"], vec!["1", "2"]]);
        let err = extract(&file, &config()).unwrap_err();
        let ExtractError::MissingColumns { found } = err;
        assert_eq!(found, vec!["A", "B"]);
    }

    #[test]
    fn withdrawals_only_absolute_amounts() {
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec!["2025/11/04", "-150,000", "ヤサカ"],
            vec!["2025/11/05", "200,000", "ニュウキン"],
        ]);
        let (txs, skipped) = extract(&file, &config()).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 150_000);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn eight_digit_dates_split() {
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec!["20251104", "-980", "ヤサカ"],
        ]);
        let (txs, _) = extract(&file, &config()).unwrap();
        assert_eq!(txs[0].date, "2025/11/04");
    }

    #[test]
    fn bad_rows_skip_without_aborting() {
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec!["not-a-date", "-980", "ヤサカ"],
            vec!["2025/11/04", "abc", "ヤサカ"],
            vec!["2025/11/04", "-980", "ヤサカ"],
        ]);
        let (txs, skipped) = extract(&file, &config()).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn skip_keyword_drops_row_entirely() {
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec!["2025/11/04", "-440", "振込手数料"],
        ]);
        let (txs, skipped) = extract(&file, &config()).unwrap();
        assert!(txs.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn seven_digit_reference_anchors_vendor() {
        // End-to-end rule (b): vendor is the text after the reference number,
        // with the requester annotation discarded first.
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec![
                "2025/11/04",
                "-150,000",
                "MITSUBISHI BANK HONTEN 0556309 ヤサカ (依頼人 ABC Corp)",
            ],
        ]);
        let (txs, _) = extract(&file, &config()).unwrap();
        assert_eq!(txs[0].raw_description, "ヤサカ");
    }

    #[test]
    fn institution_prefix_skipped() {
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec!["2025/11/04", "-150,000", "ミツビシ銀行 ホンテン フリコミ 123 ヤサカ タクシー"],
        ]);
        let (txs, _) = extract(&file, &config()).unwrap();
        assert_eq!(txs[0].raw_description, "ヤサカ タクシー");
    }

    #[test]
    fn plain_description_used_as_is() {
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec!["2025/11/04", "-980", "ｶ)ﾔｻｶ"],
        ]);
        let (txs, _) = extract(&file, &config()).unwrap();
        assert_eq!(txs[0].raw_description, "カ)ヤサカ");
    }

    #[test]
    fn requester_annotation_dropped_without_reference() {
        let file = bank_file(vec![
            vec!["取引日", "金額", "内容"],
            vec!["2025/11/04", "-980", "ヤサカ （依頼人 ABC）"],
        ]);
        let (txs, _) = extract(&file, &config()).unwrap();
        assert_eq!(txs[0].raw_description, "ヤサカ");
    }

    #[test]
    fn date_validation() {
        assert_eq!(parse_date("2025/11/4"), Some("2025/11/04".into()));
        assert_eq!(parse_date("2025-1-5"), Some("2025/01/05".into()));
        assert_eq!(parse_date("2025/11/04 09:30"), Some("2025/11/04".into()));
        assert_eq!(parse_date("20251104"), Some("2025/11/04".into()));
        assert_eq!(parse_date("2025/13/01"), None);
        assert_eq!(parse_date("11/04"), None);
        assert_eq!(parse_date(""), None);
    }
}
