use crate::domain::ports::Clipboard;
use crate::utils::error::{ComposerError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Pipes text into the platform's clipboard program.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Picks `pbcopy`, `clip`, `wl-copy` or `xclip` for the current platform.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", vec![])
        } else if cfg!(target_os = "windows") {
            Self::new("clip", vec![])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", vec![])
        } else {
            Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        tracing::debug!("Spawning clipboard program: {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ComposerError::clipboard(format!("cannot run {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ComposerError::clipboard(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Writes the message to a file, for headless machines.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Clipboard for FileClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }
}

/// Prints the message to stderr, leaving stdout to the rendered output.
#[derive(Debug, Clone, Default)]
pub struct StderrClipboard;

#[async_trait]
impl Clipboard for StderrClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(text.as_bytes()).await?;
        stderr.write_all(b"\n").await?;
        stderr.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_clipboard_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drafts").join("message.txt");
        let clipboard = FileClipboard::new(&path);

        clipboard.write_text("Hi there").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hi there");
    }

    #[tokio::test]
    async fn test_missing_program_is_clipboard_error() {
        let clipboard = CommandClipboard::new("definitely-not-a-clipboard-program", vec![]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, ComposerError::ClipboardError { .. }));
    }

    #[test]
    fn test_detect_picks_a_program() {
        assert!(!CommandClipboard::detect().program().is_empty());
    }
}
