//! Clipboard access.
//!
//! The clipboard write is the component's only asynchronous operation.
//! [`SystemClipboard`] drives the OS clipboard through `arboard` on a
//! blocking task; [`MemoryClipboard`] is an in-process stand-in that can be
//! told to refuse writes.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::export::ExportError;

/// A text clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: String) -> Result<(), ExportError>;
}

/// The operating system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ExportError> {
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ExportError::Clipboard(e.to_string()))
        })
        .await
        .map_err(|e| ExportError::Clipboard(format!("clipboard task failed: {e}")))?
    }
}

/// An in-memory clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    deny: bool,
}

impl MemoryClipboard {
    /// Creates an empty clipboard that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that refuses every write, like a browser without
    /// clipboard permission.
    pub fn denied() -> Self {
        Self {
            contents: Mutex::new(None),
            deny: true,
        }
    }

    /// Returns the current contents.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: String) -> Result<(), ExportError> {
        if self.deny {
            return Err(ExportError::Clipboard("write permission denied".to_string()));
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| ExportError::Clipboard("clipboard poisoned".to_string()))?;
        *contents = Some(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_clipboard_write() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());
        clipboard.write_text("hello".to_string()).await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_memory_clipboard_overwrites() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("one".to_string()).await.unwrap();
        clipboard.write_text("two".to_string()).await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn test_denied_clipboard() {
        let clipboard = MemoryClipboard::denied();
        let err = clipboard.write_text("x".to_string()).await.unwrap_err();
        assert!(matches!(err, ExportError::Clipboard(_)));
        assert!(clipboard.contents().is_none());
    }
}
