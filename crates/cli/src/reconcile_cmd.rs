//! `kshk reconcile` — the full pipeline: read, extract, resolve, match.

use std::fs;
use std::path::{Path, PathBuf};

use keshikomi_extract::SourceShape;
use keshikomi_recon::{AliasStore, AliasTable, ReconError, ReportRow};

use crate::alias_store::CsvAliasStore;
use crate::exit_codes::{EXIT_MISSING_COLUMNS, EXIT_UNMATCHED, EXIT_UNREADABLE};
use crate::CliError;

pub(crate) struct ReconcileArgs {
    pub bank: PathBuf,
    pub ledger: PathBuf,
    pub aliases: PathBuf,
    pub shape: Option<SourceShape>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub record_unknowns: bool,
    pub quiet: bool,
}

pub(crate) fn cmd_reconcile(args: ReconcileArgs) -> Result<(), CliError> {
    let config = crate::load_extract_config(&args.config)?;

    // Bank side: read + extract
    let bank_file = read_table(&args.bank, None)?;
    if !args.quiet {
        eprintln!(
            "read {} as {} ({} rows)",
            args.bank.display(),
            bank_file.format,
            bank_file.rows.len(),
        );
    }
    let extracted =
        keshikomi_extract::extract(&bank_file, args.shape, &config).map_err(|e| CliError {
            code: EXIT_MISSING_COLUMNS,
            message: e.to_string(),
            hint: Some("override header keywords with --config, or force --shape".into()),
        })?;
    if !args.quiet {
        eprintln!(
            "extracted {} transaction(s) via {} shape, {} row(s) skipped",
            extracted.transactions.len(),
            extracted.shape,
            extracted.skipped,
        );
    }

    // Ledger side
    let ledger_file = read_table(&args.ledger, None)?;
    let (invoices, ledger_skipped) =
        keshikomi_recon::load_invoices(&ledger_file.rows).map_err(|e| {
            let code = match e {
                ReconError::MissingColumns { .. } | ReconError::EmptyTable(_) => {
                    EXIT_MISSING_COLUMNS
                }
            };
            CliError {
                code,
                message: e.to_string(),
                hint: None,
            }
        })?;
    if !args.quiet && ledger_skipped > 0 {
        eprintln!("ledger: {ledger_skipped} row(s) skipped for unparseable amounts");
    }

    // Alias mapping
    let alias_file = read_table(
        &args.aliases,
        Some("create the mapping CSV with a header row and two columns: bank key, canonical name"),
    )?;
    let alias_table = AliasTable::from_rows(&alias_file.rows);
    if !args.quiet {
        eprintln!(
            "loaded {} invoice(s), {} alias entrie(s)",
            invoices.len(),
            alias_table.len(),
        );
    }

    // Match
    let report = keshikomi_recon::run(&extracted.transactions, &invoices, &alias_table);

    let json_str = serde_json::to_string_pretty(&report)
        .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = args.output {
        fs::write(path, &json_str)
            .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
        if !args.quiet {
            eprintln!("wrote {}", path.display());
        }
    }

    if args.json {
        println!("{json_str}");
    } else {
        print_tables(&report.matched, &report.unmatched);
    }

    let s = &report.summary;
    eprintln!(
        "{} transaction(s) — {} matched, {} unmatched, {} unknown name(s)",
        s.transactions, s.matched, s.unmatched, s.unknown_names,
    );

    // Writing back to the mapping table is operator-triggered, never implicit.
    if args.record_unknowns && !report.unknown_names.is_empty() {
        let mut store = CsvAliasStore::new(args.aliases.clone());
        let appended = store
            .append_unmapped(&report.unknown_names)
            .map_err(CliError::io)?;
        eprintln!("appended {appended} unknown name(s) to {}", args.aliases.display());
    } else if !report.unknown_names.is_empty() {
        eprintln!("re-run with --record-unknowns to append them to the alias table");
    }

    if s.unmatched > 0 {
        return Err(CliError {
            code: EXIT_UNMATCHED,
            message: format!("{} unmatched transaction(s) remain", s.unmatched),
            hint: None,
        });
    }

    Ok(())
}

fn read_table(
    path: &Path,
    hint: Option<&str>,
) -> Result<keshikomi_io::BankFile, CliError> {
    keshikomi_io::read(path).map_err(|e| CliError {
        code: EXIT_UNREADABLE,
        message: format!("{}: {e}", path.display()),
        hint: hint.map(|h| h.to_string()),
    })
}

fn print_tables(matched: &[ReportRow], unmatched: &[ReportRow]) {
    println!("# matched ({})", matched.len());
    print_rows(matched);
    println!();
    println!("# unmatched ({})", unmatched.len());
    print_rows(unmatched);
}

fn print_rows(rows: &[ReportRow]) {
    for row in rows {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            row.date, row.bank_description, row.resolved_name, row.amount_display, row.status,
        );
    }
}
