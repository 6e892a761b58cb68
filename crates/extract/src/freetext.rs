//! Line-oriented fallback for text recovered from scanned statements.
//!
//! OCR output interleaves watermark fragments with real rows, so a line only
//! counts when it carries a date; amounts are collected from the end of the
//! line (the rightmost numeral is the running balance, the one before it the
//! transaction amount), and the vendor is whatever sits between the date and
//! the first numeral.

use keshikomi_io::BankFile;
use keshikomi_text::{normalize, parse_amount};
use regex::Regex;

use crate::config::ExtractConfig;
use crate::model::BankTransaction;

pub(crate) fn extract(file: &BankFile, config: &ExtractConfig) -> (Vec<BankTransaction>, usize) {
    let date_re = Regex::new(r"(\d{4})[/-](\d{1,2})[/-](\d{1,2})").unwrap();

    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for line in file.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Watermark-only lines carry no date and are not failures.
        let Some(caps) = date_re.captures(line) else {
            continue;
        };

        match parse_line(line, &caps, config) {
            Some(tx) => transactions.push(tx),
            None => skipped += 1,
        }
    }

    (transactions, skipped)
}

fn parse_line(
    line: &str,
    caps: &regex::Captures<'_>,
    config: &ExtractConfig,
) -> Option<BankTransaction> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let date = format!("{year:04}/{month:02}/{day:02}");

    let after_date = line[caps.get(0).unwrap().end()..].trim();
    let tokens: Vec<&str> = after_date.split_whitespace().collect();

    // Scan from the end: collect numeric tokens until a non-numeric token
    // ends the amount area (tolerating stray watermark words in between
    // while fewer than two numerals have been seen).
    let mut amounts: Vec<i64> = Vec::new();
    let mut first_numeric = tokens.len();
    for (i, token) in tokens.iter().enumerate().rev() {
        match parse_amount(token) {
            Some(value) => {
                amounts.push(value);
                first_numeric = i;
            }
            None => {
                if amounts.len() >= 2 {
                    break;
                }
            }
        }
    }

    // Rightmost numeral is the balance; the one before it is the amount.
    if amounts.len() < 2 {
        return None;
    }
    let amount = amounts[1];
    if amount <= 0 {
        return None;
    }

    let vendor_tokens: Vec<&str> = tokens[..first_numeric]
        .iter()
        .copied()
        .filter(|t| !is_noise_token(t, config))
        .collect();
    let vendor = normalize(&vendor_tokens.join(" "));
    if vendor.is_empty() {
        return None;
    }

    Some(BankTransaction {
        date,
        raw_description: vendor,
        amount,
    })
}

/// Exact token match only — substring matching would truncate vendor names
/// that merely contain an institution fragment.
fn is_noise_token(token: &str, config: &ExtractConfig) -> bool {
    let token = token.to_lowercase();
    config.noise_tokens.iter().any(|n| n.to_lowercase() == token)
}
