//! Zengin-style fixed-field records: a record-type sentinel selects data
//! rows, the date is era-encoded, and amount/description sit at fixed field
//! positions. Deposit/withdrawal is carried by row semantics, so the amount
//! just has to be positive.

use keshikomi_io::BankFile;
use keshikomi_text::{normalize, parse_amount};

use crate::config::ExtractConfig;
use crate::model::BankTransaction;

/// Record-type value marking a data row.
const DATA_RECORD: &str = "2";
/// Field positions in a data record.
const DATE_FIELD: usize = 2;
const AMOUNT_FIELD: usize = 6;
const DESCRIPTION_FIELD: usize = 14;

pub(crate) fn has_data_records(file: &BankFile) -> bool {
    file.rows.iter().any(|row| {
        row.first().map(|f| f.trim()) == Some(DATA_RECORD) && row.len() > DESCRIPTION_FIELD
    })
}

pub(crate) fn extract(file: &BankFile, config: &ExtractConfig) -> (Vec<BankTransaction>, usize) {
    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for row in &file.rows {
        // Header/trailer records (type 1/8/9) are structural, not data.
        if row.first().map(|f| f.trim()) != Some(DATA_RECORD) {
            continue;
        }
        match parse_record(row, config) {
            Some(tx) => transactions.push(tx),
            None => skipped += 1,
        }
    }

    (transactions, skipped)
}

fn parse_record(row: &[String], config: &ExtractConfig) -> Option<BankTransaction> {
    let date = parse_era_date(row.get(DATE_FIELD)?.trim(), config.era_offset)?;

    let amount = parse_amount(row.get(AMOUNT_FIELD)?)?;
    if amount <= 0 {
        return None;
    }

    let description = normalize(row.get(DESCRIPTION_FIELD)?);
    if description.is_empty() {
        return None;
    }

    Some(BankTransaction {
        date,
        raw_description: description,
        amount,
    })
}

/// Decode `EEMMDD` (era year, month, day) into `YYYY/MM/DD` using the
/// configured era offset.
fn parse_era_date(field: &str, era_offset: i32) -> Option<String> {
    if field.len() != 6 || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let era_year: i32 = field[0..2].parse().ok()?;
    let month: u32 = field[2..4].parse().ok()?;
    let day: u32 = field[4..6].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{:04}/{month:02}/{day:02}", era_year + era_offset))
}
