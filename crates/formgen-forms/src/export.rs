//! Offering documents to the user as downloads.
//!
//! A [`Download`] is a named file body; an [`Exporter`] hands it to the
//! user. [`DirectoryExporter`] writes it into a download directory and
//! [`MemoryExporter`] keeps it in memory for tests and embedding callers.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::info;

/// Content type of every JSON download.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors raised while handing a document to an external capability.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The system clipboard is unavailable or refused the write.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The document could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The download could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of the body.
    pub content_type: String,
    /// File contents.
    pub body: String,
}

impl Download {
    /// Creates a JSON download.
    pub fn json(file_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            body: body.into(),
        }
    }
}

/// Hands downloads to the user.
pub trait Exporter: Send + Sync {
    /// Offers one download.
    fn export(&self, download: &Download) -> Result<(), ExportError>;
}

/// Writes downloads into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    dir: PathBuf,
}

impl DirectoryExporter {
    /// Creates an exporter targeting `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Exporter for DirectoryExporter {
    fn export(&self, download: &Download) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&download.file_name);
        std::fs::write(&path, &download.body)?;
        info!(path = %path.display(), bytes = download.body.len(), "download written");
        Ok(())
    }
}

/// Keeps downloads in memory.
#[derive(Debug, Default)]
pub struct MemoryExporter {
    downloads: Mutex<Vec<Download>>,
}

impl MemoryExporter {
    /// Creates an empty exporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every download offered so far.
    pub fn downloads(&self) -> Vec<Download> {
        self.downloads
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent download.
    pub fn last(&self) -> Option<Download> {
        self.downloads().pop()
    }
}

impl Exporter for MemoryExporter {
    fn export(&self, download: &Download) -> Result<(), ExportError> {
        self.downloads
            .lock()
            .map_err(|_| ExportError::Io(std::io::Error::other("download store poisoned")))?
            .push(download.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_json() {
        let d = Download::json("form_submission.json", "{}");
        assert_eq!(d.content_type, "application/json");
        assert_eq!(d.file_name, "form_submission.json");
    }

    #[test]
    fn test_directory_exporter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let exporter = DirectoryExporter::new(&target);
        exporter
            .export(&Download::json("form_submission.json", "{\n  \"a\": \"1\"\n}"))
            .unwrap();
        let written = std::fs::read_to_string(target.join("form_submission.json")).unwrap();
        assert_eq!(written, "{\n  \"a\": \"1\"\n}");
    }

    #[test]
    fn test_directory_exporter_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        // A regular file where the directory should be.
        let exporter = DirectoryExporter::new(&blocker);
        let err = exporter.export(&Download::json("a.json", "{}")).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_memory_exporter_records() {
        let exporter = MemoryExporter::new();
        assert!(exporter.last().is_none());
        exporter.export(&Download::json("a.json", "1")).unwrap();
        exporter.export(&Download::json("b.json", "2")).unwrap();
        assert_eq!(exporter.downloads().len(), 2);
        assert_eq!(exporter.last().unwrap().file_name, "b.json");
    }
}
