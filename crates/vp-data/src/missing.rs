/// Cell texts read as missing values, in addition to blank cells.
pub const NA_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>", "#N/A",
];

pub fn is_missing(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || NA_TOKENS.contains(&trimmed)
}

/// Parses a present cell as a number. Surrounding whitespace is ignored.
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_tokens_are_missing() {
        assert!(is_missing(""));
        assert!(is_missing("   "));
        assert!(is_missing("NaN"));
        assert!(is_missing(" NA "));
        assert!(!is_missing("0"));
        assert!(!is_missing("nah"));
    }

    #[test]
    fn numbers_parse_with_whitespace() {
        assert_eq!(parse_number(" 3.5 "), Some(3.5));
        assert_eq!(parse_number("-2e3"), Some(-2000.0));
        assert_eq!(parse_number("x"), None);
    }
}
