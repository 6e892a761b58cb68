/// Which interpretation of the input bytes won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Excel,
    Utf8Text,
    ShiftJisText,
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excel => write!(f, "excel"),
            Self::Utf8Text => write!(f, "utf-8 text"),
            Self::ShiftJisText => write!(f, "shift_jis text"),
        }
    }
}

/// A decoded bank export: uniform rows plus, for text inputs, the decoded
/// text itself (line-oriented extraction must not round-trip through the
/// field splitter — it would cut comma-grouped amounts apart).
#[derive(Debug, Clone)]
pub struct BankFile {
    pub format: FileFormat,
    pub rows: Vec<Vec<String>>,
    pub text: Option<String>,
}

impl BankFile {
    /// First row with surrounding whitespace trimmed off each label, for
    /// header-keyword lookup.
    pub fn headers(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.iter().map(|h| h.trim().to_string()).collect())
            .unwrap_or_default()
    }

    /// The input as display lines: decoded text lines where available,
    /// otherwise rows re-joined with single spaces.
    pub fn lines(&self) -> Vec<String> {
        match &self.text {
            Some(text) => text.lines().map(|l| l.to_string()).collect(),
            None => self
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .filter(|f| !f.is_empty())
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect(),
        }
    }
}
