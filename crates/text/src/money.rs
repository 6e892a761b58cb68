use unicode_normalization::UnicodeNormalization;

/// Parse a yen amount as it appears in bank exports and ledger sheets:
/// comma-grouped, optionally signed, optionally wrapped in `¥`/`￥`/`円`,
/// possibly typed in full-width digits. Returns `None` on anything that is
/// not a plain integer amount.
pub fn parse_amount(s: &str) -> Option<i64> {
    let folded: String = s.nfkc().collect();
    let cleaned: String = folded
        .chars()
        .filter(|c| !matches!(c, ',' | '¥' | '\\' | ' '))
        .collect();
    let cleaned = cleaned.trim_end_matches('円');

    let (negative, body) = match cleaned.strip_prefix(['-', '\u{2212}']) {
        Some(rest) => (true, rest),
        None => (false, cleaned),
    };

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: i64 = body.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Display form used in report rows: `¥` + comma-grouped digits.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}
