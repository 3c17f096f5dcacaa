//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing. Labels end up inside
//! file names, so they are checked for characters that would change the
//! directory layout.

/// Whitespace-separated list of mediator masses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MassList(pub Vec<u32>);

impl MassList {
    /// Consume the list, returning the masses in the order given.
    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

/// Parse a whitespace-separated mass list such as `"200 250 300"`.
pub fn parse_mass_list(s: &str) -> Result<MassList, String> {
    let masses = s
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| format!("'{token}' is not a valid mass"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if masses.is_empty() {
        return Err("mass list must contain at least one value".to_string());
    }

    Ok(MassList(masses))
}

/// Validate a signal strength, keeping the text as typed.
///
/// The value is forwarded to the toy generator verbatim, so `0.20` stays
/// `0.20` rather than being reformatted.
pub fn parse_signal_strength(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() {
        return Err(format!("signal strength must be finite, got {value}"));
    }

    Ok(trimmed.to_string())
}

/// Validate a label that is substituted into file names.
pub fn parse_label(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("value must not be empty".to_string());
    }

    if let Some(bad) = s.chars().find(|&c| matches!(c, '/' | '\\' | '*' | '?')) {
        return Err(format!("'{s}' contains '{bad}', which is not allowed in file names"));
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!("'{s}' must not contain whitespace"));
    }

    Ok(s.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mass_list_valid() {
        assert_eq!(
            parse_mass_list("200 250 300").ok(),
            Some(MassList(vec![200, 250, 300]))
        );
        assert_eq!(
            parse_mass_list("  350\t400 ").ok(),
            Some(MassList(vec![350, 400]))
        );
    }

    #[test]
    fn test_parse_mass_list_keeps_order_and_duplicates() {
        let list = parse_mass_list("500 200 500").unwrap();
        assert_eq!(list.into_inner(), vec![500, 200, 500]);
    }

    #[test]
    fn test_parse_mass_list_invalid() {
        assert!(parse_mass_list("").is_err());
        assert!(parse_mass_list("200 abc").is_err());
        assert!(parse_mass_list("-200").is_err());
    }

    #[test]
    fn test_parse_signal_strength_keeps_text() {
        assert_eq!(parse_signal_strength("0.20").ok(), Some("0.20".to_string()));
        assert_eq!(parse_signal_strength("1").ok(), Some("1".to_string()));
        assert_eq!(parse_signal_strength("-0.5").ok(), Some("-0.5".to_string()));
    }

    #[test]
    fn test_parse_signal_strength_invalid() {
        assert!(parse_signal_strength("abc").is_err());
        assert!(parse_signal_strength("inf").is_err());
        assert!(parse_signal_strength("NaN").is_err());
    }

    #[test]
    fn test_parse_label_valid() {
        assert_eq!(parse_label("bdt=0.67").ok(), Some("bdt=0.67".to_string()));
        assert_eq!(parse_label("0p3").ok(), Some("0p3".to_string()));
    }

    #[test]
    fn test_parse_label_invalid() {
        assert!(parse_label("").is_err());
        assert!(parse_label("a/b").is_err());
        assert!(parse_label("bdt*").is_err());
        assert!(parse_label("bdt 0.67").is_err());
        assert!(parse_label("cut?").unwrap_err().contains("not allowed"));
    }
}
