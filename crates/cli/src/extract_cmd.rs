//! `kshk extract` — bank export file to transaction rows.

use std::path::{Path, PathBuf};

use keshikomi_extract::SourceShape;

use crate::exit_codes::{EXIT_MISSING_COLUMNS, EXIT_UNREADABLE};
use crate::CliError;

pub(crate) fn cmd_extract(
    file: &Path,
    shape: Option<SourceShape>,
    config_path: &Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let config = crate::load_extract_config(config_path)?;

    let bank_file = keshikomi_io::read(file).map_err(|e| CliError {
        code: EXIT_UNREADABLE,
        message: e.to_string(),
        hint: Some("supported inputs: Excel workbook, UTF-8 or Shift_JIS delimited text".into()),
    })?;

    if !quiet {
        eprintln!(
            "read {} as {} ({} rows)",
            file.display(),
            bank_file.format,
            bank_file.rows.len(),
        );
    }

    let report = keshikomi_extract::extract(&bank_file, shape, &config).map_err(|e| CliError {
        code: EXIT_MISSING_COLUMNS,
        message: e.to_string(),
        hint: Some("override header keywords with --config, or force --shape".into()),
    })?;

    if !quiet {
        eprintln!(
            "extracted {} transaction(s) via {} shape, {} row(s) skipped",
            report.transactions.len(),
            report.shape,
            report.skipped,
        );
    }

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer
        .write_record(["date", "description", "amount"])
        .map_err(|e| CliError::io(e.to_string()))?;
    for tx in &report.transactions {
        writer
            .write_record([
                tx.date.as_str(),
                tx.raw_description.as_str(),
                &tx.amount.to_string(),
            ])
            .map_err(|e| CliError::io(e.to_string()))?;
    }
    writer.flush().map_err(|e| CliError::io(e.to_string()))?;

    Ok(())
}
