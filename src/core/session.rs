use crate::config::{OutputFormat, Settings};
use crate::core::composer::{compose, render_highlights};
use crate::core::copy::{CopyFeedback, COPIED_CONFIRMATION};
use crate::domain::model::ComposedMessage;
use crate::domain::ports::Clipboard;
use crate::utils::error::Result;
use serde::Serialize;
use std::time::Duration;

/// What one run produced: the composed message and whether it was copied.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    #[serde(flatten)]
    pub composed: ComposedMessage,
    pub copied: bool,
}

/// Renders the form once and optionally copies the result.
pub struct ComposerSession<C: Clipboard> {
    settings: Settings,
    feedback: CopyFeedback<C>,
}

impl<C: Clipboard> ComposerSession<C> {
    pub fn new(settings: Settings, clipboard: C) -> Self {
        let reset_after = Duration::from_millis(settings.reset_ms);
        Self {
            feedback: CopyFeedback::with_reset_after(clipboard, reset_after),
            settings,
        }
    }

    pub fn feedback(&self) -> &CopyFeedback<C> {
        &self.feedback
    }

    pub async fn run(&self) -> Result<SessionReport> {
        let composed = compose(&self.settings.input);
        tracing::debug!(
            "Composed message with {} observation(s)",
            composed.observations.len()
        );

        let copied = if self.settings.copy {
            self.feedback.copy(&composed.message).await
        } else {
            false
        };

        Ok(SessionReport { composed, copied })
    }

    /// Formats a report for stdout according to the configured output format.
    pub fn render(&self, report: &SessionReport) -> Result<String> {
        match self.settings.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => {
                let mut out = report.composed.message.clone();
                if self.settings.highlights {
                    out.push_str("\n\nObservational Highlights\n");
                    out.push_str(&render_highlights(&report.composed.observations));
                }
                if report.copied {
                    out.push_str("\n\n");
                    out.push_str(COPIED_CONFIRMATION);
                }
                Ok(out)
            }
        }
    }
}
