use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for a rendered message ("copy text, report success").
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

#[async_trait]
impl<C: Clipboard + ?Sized> Clipboard for std::sync::Arc<C> {
    async fn write_text(&self, text: &str) -> Result<()> {
        (**self).write_text(text).await
    }
}

#[async_trait]
impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    async fn write_text(&self, text: &str) -> Result<()> {
        (**self).write_text(text).await
    }
}
