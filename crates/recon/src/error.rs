use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// A required column keyword was not found in a table's header row.
    MissingColumns {
        table: String,
        missing: Vec<String>,
        found: Vec<String>,
    },
    /// The table has no rows at all (not even a header).
    EmptyTable(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns {
                table,
                missing,
                found,
            } => write!(
                f,
                "{table}: missing column(s) {} (headers found: {})",
                missing.join(", "),
                found.join(", ")
            ),
            Self::EmptyTable(table) => write!(f, "{table}: table has no rows"),
        }
    }
}

impl std::error::Error for ReconError {}
