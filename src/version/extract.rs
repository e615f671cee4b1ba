//! main.lua version extractor
//!
//! Locates the version assignments in the game entry point:
//! - `DEPLS_VERSION = "4.0.0-beta2"` (required)
//! - `DEPLS_VERSION_NUMBER = 3050200` (required)
//! - `DEPLS_VERSION_CODENAME = "Hibiki"` (optional)
//!
//! Only the first occurrence of each tag is used, wherever it appears.

use regex::Regex;
use tracing::debug;

use crate::config::{VERSION_CODENAME_TAG, VERSION_NUMBER_TAG, VERSION_TAG};
use crate::version::error::ExtractError;
use crate::version::record::VersionRecord;

/// Extractor for the version tags of main.lua
pub struct VersionExtractor {
    /// Regex for `DEPLS_VERSION = "..."`
    textual_re: Regex,
    /// Regex for `DEPLS_VERSION_NUMBER = 123`
    number_re: Regex,
    /// Regex for `DEPLS_VERSION_CODENAME = "..."`
    codename_re: Regex,
}

impl VersionExtractor {
    pub fn new() -> Self {
        Self {
            textual_re: quoted_tag(VERSION_TAG),
            number_re: Regex::new(&format!(
                "{} = ([0-9]+)",
                regex::escape(VERSION_NUMBER_TAG)
            ))
            .unwrap(),
            codename_re: quoted_tag(VERSION_CODENAME_TAG),
        }
    }

    /// Extract the version record from `content`.
    ///
    /// Fails if either `DEPLS_VERSION` or `DEPLS_VERSION_NUMBER` is absent;
    /// a missing codename becomes an empty string.
    pub fn extract(&self, content: &str) -> Result<VersionRecord, ExtractError> {
        let textual = first_capture(&self.textual_re, content)
            .ok_or(ExtractError::MissingField { tag: VERSION_TAG })?;

        let number = first_capture(&self.number_re, content).ok_or(ExtractError::MissingField {
            tag: VERSION_NUMBER_TAG,
        })?;
        let version_integer = number
            .parse::<u64>()
            .map_err(|_| ExtractError::InvalidNumber {
                tag: VERSION_NUMBER_TAG,
                value: number.to_string(),
            })?;

        let codename = first_capture(&self.codename_re, content).unwrap_or_default();

        let record = VersionRecord::new(version_integer, textual, codename);
        debug!(
            "Extracted version {} ({}) codename {:?}",
            record.textual(),
            record.version_integer(),
            record.codename()
        );
        Ok(record)
    }
}

impl Default for VersionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the regex for `TAG = "value"`
fn quoted_tag(tag: &str) -> Regex {
    Regex::new(&format!(r#"{} = "(.+)""#, regex::escape(tag))).unwrap()
}

fn first_capture<'a>(re: &Regex, content: &'a str) -> Option<&'a str> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn extract_reads_all_fields() {
        let extractor = VersionExtractor::new();
        let content = r#"-- Live Simulator: 2
DEPLS_VERSION = "4.0.0-beta2"
DEPLS_VERSION_NUMBER = 3050200
DEPLS_VERSION_CODENAME = "Hibiki"
"#;
        let record = extractor.extract(content).unwrap();

        assert_eq!(record, VersionRecord::new(3050200, "4.0.0-beta2", "Hibiki"));
        assert_eq!(record.major(), 3);
        assert_eq!(record.minor(), 5);
        assert_eq!(record.patch(), 2);
    }

    #[test]
    fn extract_defaults_missing_codename_to_empty() {
        let extractor = VersionExtractor::new();
        let content = r#"DEPLS_VERSION = "2.1.3-beta"
DEPLS_VERSION_NUMBER = 2010300
"#;
        let record = extractor.extract(content).unwrap();

        assert_eq!(record.version_integer(), 2010300);
        assert_eq!(record.major(), 2);
        assert_eq!(record.minor(), 1);
        assert_eq!(record.patch(), 3);
        assert_eq!(record.textual(), "2.1.3-beta");
        assert_eq!(record.codename(), "");
    }

    #[rstest]
    #[case("DEPLS_VERSION_NUMBER = 2010300\n", "DEPLS_VERSION")]
    #[case("DEPLS_VERSION = \"2.1.3\"\n", "DEPLS_VERSION_NUMBER")]
    #[case("DEPLS_VERSION = \"2.1.3\"\nDEPLS_VERSION_NUMBER = abc\n", "DEPLS_VERSION_NUMBER")]
    #[case("", "DEPLS_VERSION")]
    fn extract_fails_when_required_tag_is_missing(#[case] content: &str, #[case] tag: &str) {
        let extractor = VersionExtractor::new();

        let err = extractor.extract(content).unwrap_err();

        assert!(
            matches!(err, ExtractError::MissingField { tag: t } if t == tag),
            "unexpected error: {err:?}"
        );
        assert_eq!(err.to_string(), format!("unable to extract \"{tag}\""));
    }

    #[test]
    fn extract_fails_on_overflowing_number() {
        let extractor = VersionExtractor::new();
        let content = "DEPLS_VERSION = \"1\"\nDEPLS_VERSION_NUMBER = 99999999999999999999999\n";

        let err = extractor.extract(content).unwrap_err();

        assert!(matches!(err, ExtractError::InvalidNumber { .. }));
    }

    #[test]
    fn extract_uses_first_occurrence() {
        let extractor = VersionExtractor::new();
        let content = r#"-- old: DEPLS_VERSION = "1.0.0"
DEPLS_VERSION = "2.0.0"
DEPLS_VERSION_NUMBER = 1000000
DEPLS_VERSION_NUMBER = 2000000
"#;
        let record = extractor.extract(content).unwrap();

        assert_eq!(record.textual(), "1.0.0");
        assert_eq!(record.version_integer(), 1000000);
    }

    #[test]
    fn extract_does_not_confuse_number_tag_with_textual_tag() {
        let extractor = VersionExtractor::new();
        let content = "DEPLS_VERSION_NUMBER = 2010300\nDEPLS_VERSION = \"2.1.3\"\n";

        let record = extractor.extract(content).unwrap();

        assert_eq!(record.textual(), "2.1.3");
        assert_eq!(record.version_integer(), 2010300);
    }

    #[test]
    fn extract_quoted_value_is_greedy_within_line() {
        let extractor = VersionExtractor::new();
        let content = "DEPLS_VERSION = \"2.1.3\" -- \"stable\"\nDEPLS_VERSION_NUMBER = 2010300\n";

        let record = extractor.extract(content).unwrap();

        assert_eq!(record.textual(), "2.1.3\" -- \"stable");
    }

    #[test]
    fn extract_is_idempotent() {
        let extractor = VersionExtractor::new();
        let content = "DEPLS_VERSION = \"2.1.3\"\nDEPLS_VERSION_NUMBER = 2010300\n";

        assert_eq!(
            extractor.extract(content).unwrap(),
            extractor.extract(content).unwrap()
        );
    }

    #[test]
    fn extract_wraps_out_of_range_components() {
        let extractor = VersionExtractor::new();
        let content = "DEPLS_VERSION = \"12.34.56\"\nDEPLS_VERSION_NUMBER = 12345678\n";

        let record = extractor.extract(content).unwrap();

        assert_eq!(record.major(), 2);
        assert_eq!(record.version_integer(), 12345678);
    }
}
