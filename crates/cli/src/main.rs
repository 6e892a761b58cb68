// Keshikomi CLI - reconcile bank withdrawal exports against the payables ledger

mod alias_store;
mod exit_codes;
mod extract_cmd;
mod reconcile_cmd;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use keshikomi_extract::{ExtractConfig, SourceShape};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "kshk")]
#[command(about = "Reconcile bank withdrawal exports against the payables ledger")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract withdrawal transactions from a bank export file
    #[command(after_help = "\
Examples:
  kshk extract statement.csv
  kshk extract statement.xlsx --json
  kshk extract zengin.csv --shape zengin
  kshk extract scanned.txt --shape freetext --config keywords.toml")]
    Extract {
        /// Bank export file (Excel workbook, CSV, or OCR-recovered text)
        file: PathBuf,

        /// Source shape (default: detect)
        #[arg(long, value_enum, default_value_t = ShapeArg::Auto)]
        shape: ShapeArg,

        /// TOML file overriding extraction keywords
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output JSON instead of CSV
        #[arg(long)]
        json: bool,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Reconcile a bank export against the ledger and alias mapping
    #[command(after_help = "\
Examples:
  kshk reconcile --bank statement.csv --ledger ledger.csv --aliases mapping.csv
  kshk reconcile --bank statement.xlsx --ledger ledger.csv --aliases mapping.csv --json
  kshk reconcile --bank zengin.csv --shape zengin --ledger ledger.csv --aliases mapping.csv \\
      --record-unknowns

Exits 5 when unmatched transactions remain, so shell pipelines can react.")]
    Reconcile {
        /// Bank export file
        #[arg(long)]
        bank: PathBuf,

        /// Ledger table (Status / Vendor / FB Amount columns)
        #[arg(long)]
        ledger: PathBuf,

        /// Alias mapping table: bank key, canonical vendor name
        #[arg(long)]
        aliases: PathBuf,

        /// Source shape of the bank file (default: detect)
        #[arg(long, value_enum, default_value_t = ShapeArg::Auto)]
        shape: ShapeArg,

        /// TOML file overriding extraction keywords
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output the full JSON report to stdout instead of tables
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Append this run's unknown names to the alias table
        #[arg(long)]
        record_unknowns: bool,

        /// Suppress progress on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Print the canonical form of bank text (alias key preview)
    Normalize {
        text: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShapeArg {
    /// Detect from the file contents
    Auto,
    /// Header-labelled date/amount/description columns
    Columnar,
    /// Zengin fixed-field records
    Zengin,
    /// Line-oriented OCR text
    Freetext,
}

impl ShapeArg {
    fn to_shape(self) -> Option<SourceShape> {
        match self {
            Self::Auto => None,
            Self::Columnar => Some(SourceShape::Columnar),
            Self::Zengin => Some(SourceShape::FixedField),
            Self::Freetext => Some(SourceShape::FreeText),
        }
    }
}

pub(crate) struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_ERROR,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: msg.into(),
            hint: None,
        }
    }
}

pub(crate) fn load_extract_config(path: &Option<PathBuf>) -> Result<ExtractConfig, CliError> {
    let Some(path) = path else {
        return Ok(ExtractConfig::default());
    };
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::usage(format!("cannot read config {}: {e}", path.display())))?;
    toml::from_str(&content)
        .map_err(|e| CliError::usage(format!("config parse error in {}: {e}", path.display())))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            file,
            shape,
            config,
            json,
            quiet,
        } => extract_cmd::cmd_extract(&file, shape.to_shape(), &config, json, quiet),
        Commands::Reconcile {
            bank,
            ledger,
            aliases,
            shape,
            config,
            json,
            output,
            record_unknowns,
            quiet,
        } => reconcile_cmd::cmd_reconcile(reconcile_cmd::ReconcileArgs {
            bank,
            ledger,
            aliases,
            shape: shape.to_shape(),
            config,
            json,
            output,
            record_unknowns,
            quiet,
        }),
        Commands::Normalize { text } => {
            println!("{}", keshikomi_text::normalize(&text));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}
