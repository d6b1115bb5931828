use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Clipboard write failed: {message}")]
    ClipboardError { message: String },
}

impl ComposerError {
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::ClipboardError {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ComposerError::IoError(e) => format!("Could not read or write a file: {}", e),
            ComposerError::SerializationError(e) => format!("Could not encode output: {}", e),
            ComposerError::TomlError(e) => format!("The profile is not valid TOML: {}", e),
            ComposerError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            ComposerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ComposerError::ClipboardError { message } => {
                format!("Could not copy the message: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ComposerError::IoError(_) => "Check that the path exists and is readable",
            ComposerError::SerializationError(_) => "Retry with --format text",
            ComposerError::TomlError(_) | ComposerError::ConfigValidationError { .. } => {
                "Fix the profile file and run again"
            }
            ComposerError::InvalidConfigValueError { .. } => {
                "Adjust the value on the command line or in the profile"
            }
            ComposerError::ClipboardError { .. } => {
                "Install pbcopy, wl-copy or xclip, or use --clipboard stderr"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposerError>;
