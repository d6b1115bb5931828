use crate::domain::ports::Clipboard;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_RESET_MS: u64 = 2500;
pub const COPIED_CONFIRMATION: &str = "Message copied to clipboard.";

/// Copies messages through a [`Clipboard`] and tracks the transient
/// "copied" confirmation.
pub struct CopyFeedback<C: Clipboard> {
    clipboard: C,
    copied: Arc<AtomicBool>,
    reset_after: Duration,
}

impl<C: Clipboard> CopyFeedback<C> {
    pub fn new(clipboard: C) -> Self {
        Self::with_reset_after(clipboard, Duration::from_millis(DEFAULT_RESET_MS))
    }

    pub fn with_reset_after(clipboard: C, reset_after: Duration) -> Self {
        Self {
            clipboard,
            copied: Arc::new(AtomicBool::new(false)),
            reset_after,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    /// Writes `message` to the clipboard. Returns whether the write succeeded.
    ///
    /// On success the flag is raised and a timer is spawned to lower it
    /// again. Earlier timers keep running, so an older one may clear the
    /// flag before the newest one does. Must be called inside a Tokio runtime.
    pub async fn copy(&self, message: &str) -> bool {
        match self.clipboard.write_text(message).await {
            Ok(()) => {
                self.copied.store(true, Ordering::SeqCst);
                tracing::debug!(
                    "📋 Copied {} bytes, confirmation clears in {:?}",
                    message.len(),
                    self.reset_after
                );

                let copied = Arc::clone(&self.copied);
                let delay = self.reset_after;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    copied.store(false, Ordering::SeqCst);
                });
                true
            }
            Err(e) => {
                self.copied.store(false, Ordering::SeqCst);
                tracing::warn!("⚠️ Clipboard write rejected: {}", e);
                false
            }
        }
    }
}
