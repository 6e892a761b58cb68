//! CSV-file-backed implementation of the alias mapping store.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use keshikomi_recon::AliasStore;

/// Appends unmapped keys to a two-column mapping CSV, canonical column left
/// blank for the operator to fill in. Existing rows are never touched.
pub(crate) struct CsvAliasStore {
    path: PathBuf,
}

impl CsvAliasStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AliasStore for CsvAliasStore {
    fn append_unmapped(&mut self, keys: &[String]) -> Result<usize, String> {
        // Guard against a file missing its final newline: appending a record
        // to it would glue onto the last row.
        let existing = fs::read_to_string(&self.path).unwrap_or_default();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| format!("cannot open {}: {e}", self.path.display()))?;

        if !existing.is_empty() && !existing.ends_with('\n') {
            writeln!(file).map_err(|e| e.to_string())?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for key in keys {
            writer
                .write_record([key.as_str(), ""])
                .map_err(|e| e.to_string())?;
        }
        writer.flush().map_err(|e| e.to_string())?;

        Ok(keys.len())
    }
}
