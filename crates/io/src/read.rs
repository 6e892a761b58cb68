use std::fs;
use std::path::Path;

use crate::file::{BankFile, FileFormat};
use crate::xlsx;

#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened or read at all.
    Io(String),
    /// Every supported interpretation of the bytes failed to parse.
    Unreadable { attempts: Vec<String> },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "cannot read file: {msg}"),
            Self::Unreadable { attempts } => {
                write!(f, "unreadable file ({})", attempts.join("; "))
            }
        }
    }
}

impl std::error::Error for ReadError {}

/// Decode a bank export into uniform rows.
///
/// Interpretations are tried in a fixed order — Excel container, delimited
/// text as UTF-8 (BOM tolerated), delimited text as Shift_JIS — and the
/// first one that parses cleanly wins. Partial or garbage decodes disqualify
/// a strategy rather than leaking downstream; when every strategy fails the
/// caller gets [`ReadError::Unreadable`] with one line per attempt.
pub fn read(path: &Path) -> Result<BankFile, ReadError> {
    let mut attempts: Vec<String> = Vec::new();

    match xlsx::import(path) {
        Ok(rows) => {
            return Ok(BankFile {
                format: FileFormat::Excel,
                rows,
                text: None,
            })
        }
        Err(e) => attempts.push(format!("excel: {e}")),
    }

    let bytes =
        fs::read(path).map_err(|e| ReadError::Io(format!("{}: {e}", path.display())))?;

    match decode_utf8(&bytes) {
        Ok(text) => match parse_delimited(&text) {
            Ok(rows) => {
                return Ok(BankFile {
                    format: FileFormat::Utf8Text,
                    rows,
                    text: Some(text),
                })
            }
            Err(e) => attempts.push(format!("utf-8: {e}")),
        },
        Err(e) => attempts.push(format!("utf-8: {e}")),
    }

    match decode_shift_jis(&bytes) {
        Ok(text) => match parse_delimited(&text) {
            Ok(rows) => {
                return Ok(BankFile {
                    format: FileFormat::ShiftJisText,
                    rows,
                    text: Some(text),
                })
            }
            Err(e) => attempts.push(format!("shift_jis: {e}")),
        },
        Err(e) => attempts.push(format!("shift_jis: {e}")),
    }

    Err(ReadError::Unreadable { attempts })
}

fn decode_utf8(bytes: &[u8]) -> Result<String, String> {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    std::str::from_utf8(bytes)
        .map(|s| s.to_string())
        .map_err(|e| format!("invalid UTF-8 at byte {}", e.valid_up_to()))
}

fn decode_shift_jis(bytes: &[u8]) -> Result<String, String> {
    let (decoded, _, had_errors) = encoding_rs::SHIFT_JIS.decode(bytes);
    if had_errors {
        return Err("invalid Shift_JIS sequence".to_string());
    }
    Ok(decoded.into_owned())
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma), count fields per line. The
/// delimiter that produces the most consistent field count (>1 field) wins;
/// inputs with no viable delimiter fall back to comma and come out as
/// one-field rows.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b','];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        // Score: (number of lines with same field count as line 1) * field_count
        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

fn parse_delimited(content: &str) -> Result<Vec<Vec<String>>, String> {
    let delimiter = sniff_delimiter(content);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        let fields: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        if fields.iter().any(|f| !f.trim().is_empty()) {
            rows.push(fields);
        }
    }

    if rows.is_empty() {
        return Err("no rows".to_string());
    }
    Ok(rows)
}
