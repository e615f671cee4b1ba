use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Version source
// =============================================================================

/// Tag preceding the quoted human-readable version
pub const VERSION_TAG: &str = "DEPLS_VERSION";

/// Tag preceding the packed version integer
pub const VERSION_NUMBER_TAG: &str = "DEPLS_VERSION_NUMBER";

/// Tag preceding the optional quoted codename
pub const VERSION_CODENAME_TAG: &str = "DEPLS_VERSION_CODENAME";

/// Number of characters of main.lua scanned when generating the resource script
pub const VERSION_SOURCE_READ_LIMIT: usize = 4096;

// =============================================================================
// Gradle properties
// =============================================================================

/// Property holding the Android version code
pub const VERSION_CODE_KEY: &str = "app.version_code";

/// Property holding the Android version name
pub const VERSION_NAME_KEY: &str = "app.version_name";

// =============================================================================
// CI / logging
// =============================================================================

/// Environment variable naming the GitHub Actions step output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Key written to the step output file
pub const COMMIT_OUTPUT_KEY: &str = "commit";

/// Environment variable holding the tracing filter directives
pub const LOG_ENV: &str = "DEPLS_LOG";

/// Filter used when `DEPLS_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Static metadata embedded in the Windows resource script
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceMetadata {
    pub icon: String,
    pub manifest: String,
    pub file_description: String,
    pub company_name: String,
    pub legal_copyright: String,
    pub internal_name: String,
    pub original_filename: String,
}

impl Default for ResourceMetadata {
    fn default() -> Self {
        Self {
            icon: "livesim2.ico".to_string(),
            manifest: "livesim2.manifest".to_string(),
            file_description: "Live Simulator: 2".to_string(),
            company_name: "Dark Energy Processor Corporation".to_string(),
            legal_copyright: "Copyright © 2041 Dark Energy Processor".to_string(),
            internal_name: "livesim2".to_string(),
            original_filename: "lovec.exe".to_string(),
        }
    }
}

impl ResourceMetadata {
    /// Load metadata overrides from a JSON file.
    /// Fields missing from the file keep their default values.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn resource_metadata_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<ResourceMetadata>(json!({
            "icon": "custom.ico",
            "originalFilename": "game.exe"
        }))
        .unwrap();

        assert_eq!(
            result,
            ResourceMetadata {
                icon: "custom.ico".to_string(),
                original_filename: "game.exe".to_string(),
                ..ResourceMetadata::default()
            }
        );
    }

    #[test]
    fn resource_metadata_from_empty_object_is_default() {
        let result = serde_json::from_value::<ResourceMetadata>(json!({})).unwrap();
        assert_eq!(result, ResourceMetadata::default());
    }

    #[test]
    fn from_json_file_reads_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "companyName": "Example Corp" }}"#).unwrap();

        let result = ResourceMetadata::from_json_file(file.path()).unwrap();

        assert_eq!(result.company_name, "Example Corp");
        assert_eq!(result.icon, "livesim2.ico");
    }

    #[test]
    fn from_json_file_fails_on_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(ResourceMetadata::from_json_file(file.path()).is_err());
    }
}
