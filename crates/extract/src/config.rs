use serde::Deserialize;

/// Extraction tuning: header keywords, noise filters, era anchoring.
///
/// Every field has a default matching the bank conventions this tool was
/// built against; a TOML config file can override any subset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Keywords locating the date column in a columnar export.
    pub date_headers: Vec<String>,
    /// Keywords locating the signed-amount column.
    pub amount_headers: Vec<String>,
    /// Keywords locating the free-text description column.
    pub description_headers: Vec<String>,
    /// A normalized description containing any of these drops the whole row
    /// (fees, card debits, tax withdrawals — cash movements that are not
    /// vendor payments).
    pub skip_keywords: Vec<String>,
    /// Markers identifying a financial-institution token at the start of a
    /// description (transfer-routing prefix).
    pub institution_markers: Vec<String>,
    /// Watermark fragments removed from free-text vendor tokens, exact token
    /// match only.
    pub noise_tokens: Vec<String>,
    /// Era year + offset = Gregorian year for fixed-field dates.
    pub era_offset: i32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            date_headers: str_vec(&["取引日", "日付", "操作日", "date"]),
            amount_headers: str_vec(&["入出金", "金額", "amount"]),
            description_headers: str_vec(&["内容", "摘要", "説明", "description"]),
            skip_keywords: str_vec(&[
                "振込手数料",
                "手数料",
                "カード利用",
                "税金",
                "国税",
                "口座振替",
                "自動引落",
            ]),
            institution_markers: str_vec(&[
                "銀行",
                "ギンコウ",
                "BANK",
                "信用金庫",
                "シンキン",
                "信用組合",
                "シンクミ",
            ]),
            noise_tokens: str_vec(&["rakuten", "bank", "楽天", "銀行", "天銀行", "行"]),
            // Reiwa: era year 1 = 2019
            era_offset: 2018,
        }
    }
}

fn str_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_reiwa_anchor() {
        let config = ExtractConfig::default();
        assert_eq!(config.era_offset, 2018);
        assert!(config.skip_keywords.iter().any(|k| k == "振込手数料"));
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config: ExtractConfig = toml::from_str(
            r#"
skip_keywords = ["振込手数料"]
era_offset = 1988
"#,
        )
        .unwrap();
        assert_eq!(config.skip_keywords, vec!["振込手数料"]);
        assert_eq!(config.era_offset, 1988);
        assert!(!config.date_headers.is_empty());
    }
}
