#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

use crate::adapters::{CommandClipboard, FileClipboard, StderrClipboard};
use crate::core::copy::DEFAULT_RESET_MS;
use crate::domain::model::OutreachInput;
use crate::domain::ports::Clipboard;
use crate::utils::error::{ComposerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    System,
    #[cfg_attr(feature = "cli", value(alias = "stdout"))]
    #[serde(alias = "stdout")]
    Stderr,
    File,
}

impl FromStr for ClipboardBackend {
    type Err = ComposerError;

    fn from_str(s: &str) -> Result<Self> {
        validation::validate_one_of("clipboard.backend", s, &profile::CLIPBOARD_BACKENDS)?;
        Ok(match s {
            "stderr" | "stdout" => ClipboardBackend::Stderr,
            "file" => ClipboardBackend::File,
            _ => ClipboardBackend::System,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved run settings: profile values with CLI overrides applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: OutreachInput,
    pub copy: bool,
    pub backend: ClipboardBackend,
    pub clipboard_file: Option<PathBuf>,
    pub reset_ms: u64,
    pub format: OutputFormat,
    pub highlights: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: OutreachInput::default(),
            copy: false,
            backend: ClipboardBackend::default(),
            clipboard_file: None,
            reset_ms: DEFAULT_RESET_MS,
            format: OutputFormat::default(),
            highlights: false,
        }
    }
}

impl Settings {
    pub fn clipboard(&self) -> Result<Box<dyn Clipboard>> {
        match self.backend {
            ClipboardBackend::System => Ok(Box::new(CommandClipboard::detect())),
            ClipboardBackend::Stderr => Ok(Box::new(StderrClipboard)),
            ClipboardBackend::File => {
                let path = self.clipboard_file.as_ref().ok_or_else(|| {
                    ComposerError::ConfigValidationError {
                        field: "clipboard.file".to_string(),
                        message: "the file backend needs a path".to_string(),
                    }
                })?;
                Ok(Box::new(FileClipboard::new(path)))
            }
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("clipboard.reset_ms", self.reset_ms, 1, 60_000)?;

        if self.backend == ClipboardBackend::File {
            let path = self
                .clipboard_file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();
            validation::validate_path("clipboard.file", &path)?;
        }
        Ok(())
    }
}
