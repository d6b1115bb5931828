use crate::utils::error::{ComposerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ComposerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ComposerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ComposerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ComposerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("clipboard.file", "./message.txt").is_ok());
        assert!(validate_path("clipboard.file", "").is_err());
        assert!(validate_path("clipboard.file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("clipboard.reset_ms", 2500u64, 1, 60_000).is_ok());
        assert!(validate_range("clipboard.reset_ms", 0u64, 1, 60_000).is_err());
        assert!(validate_range("clipboard.reset_ms", 60_001u64, 1, 60_000).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("clipboard.backend", "stdout", &["system", "stdout"]).is_ok());
        let err = validate_one_of("clipboard.backend", "fax", &["system", "stdout"]).unwrap_err();
        assert!(err.to_string().contains("system, stdout"));
    }
}
