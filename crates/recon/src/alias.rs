//! Operator-maintained mapping from bank-side vendor text fragments to
//! canonical ledger vendor names.

use std::collections::HashMap;

use keshikomi_text::normalize;
use serde::Serialize;

/// Display name for a description no alias could resolve.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    /// Substring used to detect the vendor; always stored normalized.
    pub bank_key: String,
    /// Ledger-side vendor name; empty means "seen but unmapped".
    pub canonical_name: String,
}

/// Outcome of resolving one bank description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    /// A key matched but its canonical column is still empty — the operator
    /// has seen this vendor before and not mapped it yet. Must not be
    /// re-appended to the store.
    Unmapped,
    /// No key matched at all.
    Unknown,
}

impl Resolution {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Resolved(name) => name,
            Self::Unmapped | Self::Unknown => UNKNOWN_NAME,
        }
    }
}

/// The alias table, in operator-defined order.
///
/// Iteration order is insertion order: when two keys both match a
/// description, the earlier row wins, so matches are deterministic and
/// reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    exact: HashMap<String, usize>,
}

impl AliasTable {
    /// Build from a two-column table. The header row is skipped, keys are
    /// normalized on load, rows with an empty key are ignored, and the first
    /// row wins on duplicate keys.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut table = Self::default();
        for row in rows.iter().skip(1) {
            let Some(key) = row.first() else { continue };
            let canonical = row.get(1).map(|c| c.trim().to_string()).unwrap_or_default();
            table.push(key, canonical);
        }
        table
    }

    pub fn push(&mut self, bank_key: &str, canonical_name: String) {
        let bank_key = normalize(bank_key);
        if bank_key.is_empty() {
            return;
        }
        if !self.exact.contains_key(&bank_key) {
            self.exact.insert(bank_key.clone(), self.entries.len());
        }
        self.entries.push(AliasEntry {
            bank_key,
            canonical_name,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a raw bank description to a canonical name: exact-key hit first,
    /// else the first entry (table order) whose key is a substring of the
    /// normalized description.
    pub fn resolve(&self, raw_description: &str) -> Resolution {
        let description = normalize(raw_description);
        if let Some(&idx) = self.exact.get(&description) {
            return self.entries[idx].resolution();
        }
        for entry in &self.entries {
            if description.contains(entry.bank_key.as_str()) {
                return entry.resolution();
            }
        }
        Resolution::Unknown
    }
}

impl AliasEntry {
    fn resolution(&self) -> Resolution {
        if self.canonical_name.is_empty() {
            Resolution::Unmapped
        } else {
            Resolution::Resolved(self.canonical_name.clone())
        }
    }
}

/// Seam to the external mapping store (a sheet or file the operator owns).
///
/// Append-only: implementations add one row per key with an empty canonical
/// column and must never rewrite or reorder existing rows.
pub trait AliasStore {
    fn append_unmapped(&mut self, keys: &[String]) -> Result<usize, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<Vec<String>> {
        let mut out = vec![vec!["Bank Key".to_string(), "Canonical Name".to_string()]];
        out.extend(
            pairs
                .iter()
                .map(|(k, v)| vec![k.to_string(), v.to_string()]),
        );
        out
    }

    #[test]
    fn exact_hit_wins_over_scan() {
        let table = AliasTable::from_rows(&rows(&[
            ("ヤサカ", "Yasaka Taxi"),
            ("カ)ヤサカ", "Yasaka Corp"),
        ]));
        // Exact key match takes the fast path even though "ヤサカ" is a
        // substring and sits earlier in the table.
        assert_eq!(
            table.resolve("カ)ヤサカ"),
            Resolution::Resolved("Yasaka Corp".into())
        );
    }

    #[test]
    fn substring_match_first_in_table_order() {
        let table = AliasTable::from_rows(&rows(&[
            ("ヤサカ", "Yasaka Taxi"),
            ("サカ", "Sakata"),
        ]));
        assert_eq!(
            table.resolve("フリコミ ヤサカ トウキョウ"),
            Resolution::Resolved("Yasaka Taxi".into())
        );
    }

    #[test]
    fn keys_normalized_on_load() {
        // Half-width key matches a full-width description and vice versa.
        let table = AliasTable::from_rows(&rows(&[("ﾔｻｶ", "Yasaka Taxi")]));
        assert_eq!(
            table.resolve("ヤサカ"),
            Resolution::Resolved("Yasaka Taxi".into())
        );
    }

    #[test]
    fn empty_canonical_is_unmapped_not_unknown() {
        let table = AliasTable::from_rows(&rows(&[("ヤサカ", "")]));
        assert_eq!(table.resolve("ヤサカ"), Resolution::Unmapped);
        assert_eq!(table.resolve("ヤサカ").display_name(), UNKNOWN_NAME);
    }

    #[test]
    fn no_hit_is_unknown() {
        let table = AliasTable::from_rows(&rows(&[("ヤサカ", "Yasaka Taxi")]));
        assert_eq!(table.resolve("XYZテスト"), Resolution::Unknown);
    }

    #[test]
    fn duplicate_keys_first_wins() {
        let table = AliasTable::from_rows(&rows(&[
            ("ヤサカ", "Yasaka Taxi"),
            ("ヤサカ", "Wrong"),
        ]));
        assert_eq!(
            table.resolve("ヤサカ"),
            Resolution::Resolved("Yasaka Taxi".into())
        );
    }

    #[test]
    fn header_row_and_blank_keys_skipped() {
        let table = AliasTable::from_rows(&rows(&[("", "Orphan"), ("ヤサカ", "Yasaka Taxi")]));
        assert_eq!(table.len(), 1);
        // The literal header text is not an alias
        assert_eq!(table.resolve("Bank Key"), Resolution::Unknown);
    }

    #[test]
    fn resolution_is_deterministic() {
        let table = AliasTable::from_rows(&rows(&[
            ("カガヤ", "Kagaya"),
            ("ヤサカ", "Yasaka Taxi"),
        ]));
        for _ in 0..3 {
            assert_eq!(
                table.resolve("カ)カガヤ"),
                Resolution::Resolved("Kagaya".into())
            );
        }
    }
}
