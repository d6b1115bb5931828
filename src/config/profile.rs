use crate::domain::model::OutreachInput;
use crate::utils::error::{ComposerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

// "stdout" is accepted as an older name for the stderr backend.
pub const CLIPBOARD_BACKENDS: [&str; 4] = ["system", "stderr", "stdout", "file"];

/// A saved form: the `[input]` fields plus optional `[clipboard]` settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlProfile {
    #[serde(default)]
    pub input: OutreachInput,
    pub clipboard: Option<ClipboardSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardSection {
    pub backend: Option<String>,
    pub file: Option<String>,
    pub reset_ms: Option<u64>,
}

impl TomlProfile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ComposerError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn backend(&self) -> Option<&str> {
        self.clipboard.as_ref().and_then(|c| c.backend.as_deref())
    }

    pub fn clipboard_file(&self) -> Option<&str> {
        self.clipboard.as_ref().and_then(|c| c.file.as_deref())
    }

    pub fn reset_ms(&self) -> Option<u64> {
        self.clipboard.as_ref().and_then(|c| c.reset_ms)
    }
}

impl Validate for TomlProfile {
    fn validate(&self) -> Result<()> {
        if let Some(backend) = self.backend() {
            validation::validate_one_of("clipboard.backend", backend, &CLIPBOARD_BACKENDS)?;
        }
        if let Some(file) = self.clipboard_file() {
            validation::validate_path("clipboard.file", file)?;
        }
        if let Some(reset_ms) = self.reset_ms() {
            validation::validate_range("clipboard.reset_ms", reset_ms, 1, 60_000)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_profile() {
        let toml_content = r#"
[input]
business_name = "Reform Fitness"
city = "Irvine"
observations_text = """
Booking calendar is waitlisted
Website chat widget offline
"""

[clipboard]
backend = "file"
file = "./out/message.txt"
reset_ms = 1000
"#;

        let profile = TomlProfile::from_toml_str(toml_content).unwrap();

        assert_eq!(profile.input.business_name, "Reform Fitness");
        assert_eq!(profile.input.city, "Irvine");
        assert_eq!(profile.input.signature, "Jordan");
        assert!(profile.input.observations_text.contains("chat widget"));
        assert_eq!(profile.backend(), Some("file"));
        assert_eq!(profile.reset_ms(), Some(1000));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_empty_profile_uses_defaults() {
        let profile = TomlProfile::from_toml_str("").unwrap();
        assert_eq!(profile.input, OutreachInput::default());
        assert!(profile.clipboard.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("OUTREACH_TEST_SIGNATURE", "Casey");

        let profile = TomlProfile::from_toml_str(
            r#"
[input]
signature = "${OUTREACH_TEST_SIGNATURE}"
owner_name = "${OUTREACH_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(profile.input.signature, "Casey");
        assert_eq!(profile.input.owner_name, "${OUTREACH_TEST_UNSET_VAR}");

        std::env::remove_var("OUTREACH_TEST_SIGNATURE");
    }

    #[test]
    fn test_profile_validation() {
        let profile = TomlProfile::from_toml_str(
            r#"
[clipboard]
backend = "carrier-pigeon"
"#,
        )
        .unwrap();
        assert!(profile.validate().is_err());

        let profile = TomlProfile::from_toml_str("[clipboard]\nreset_ms = 0\n").unwrap();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_from_file_and_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\nniche = \"Med Spa\"").unwrap();
        let profile = TomlProfile::from_file(file.path()).unwrap();
        assert_eq!(profile.input.niche, "Med Spa");

        let err = TomlProfile::from_toml_str("[input\n").unwrap_err();
        assert!(matches!(err, ComposerError::TomlError(_)));
    }
}
