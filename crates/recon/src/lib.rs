//! `keshikomi-recon` — alias resolution and reconciliation engine.
//!
//! Pure engine crate: receives extracted transactions and pre-loaded ledger
//! rows, returns matched/unmatched result sets. No CLI or IO dependencies.

pub mod alias;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod matcher;
pub mod model;

pub use alias::{AliasEntry, AliasStore, AliasTable, Resolution, UNKNOWN_NAME};
pub use engine::run;
pub use error::ReconError;
pub use ledger::load_invoices;
pub use matcher::reconcile;
pub use model::{InvoiceStatus, LedgerInvoice, MatchStatus, ReconReport, ReportRow};
