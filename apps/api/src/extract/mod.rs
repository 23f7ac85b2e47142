//! Document text extraction: PDFs via `pdf-extract`, raster images via a
//! tesseract subprocess. Lives behind a trait so handlers and tests can
//! swap backends without touching routing code.
//!
//! Extraction is the only stage that touches the filesystem. Image bytes
//! are written to a scratch directory that is removed on drop; PDFs are
//! parsed from memory.

use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use crate::errors::AppError;

/// File extensions the analyze endpoint accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "gif", "bmp"];

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Returns the lowercased extension of a filename, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Checks whether a filename carries an allowed extension.
pub fn is_allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// The extractor trait. Implement this to swap extraction backends without
/// touching the endpoint or handler code.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, filename: &str, data: &[u8]) -> Result<String, AppError>;
}

/// Default extractor: dispatches on the file extension.
pub struct DocumentExtractor {
    tesseract_cmd: String,
}

impl DocumentExtractor {
    pub fn new(tesseract_cmd: String) -> Self {
        Self { tesseract_cmd }
    }

    async fn extract_pdf(&self, data: &[u8]) -> Result<String, AppError> {
        let bytes = data.to_vec();
        // pdf-extract is synchronous and CPU-bound; keep it off the runtime
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))?
            .map_err(|e| AppError::Extraction(format!("Error extracting text from PDF: {e}")))?;
        Ok(text.trim().to_string())
    }

    async fn extract_image(&self, data: &[u8], ext: &str) -> Result<String, AppError> {
        // tesseract reads from disk; the scratch dir is removed when dropped
        let scratch = tempfile::tempdir()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to create scratch dir: {e}")))?;
        let path = scratch.path().join(format!("{}.{ext}", Uuid::new_v4()));
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to write scratch file: {e}")))?;

        let output = Command::new(&self.tesseract_cmd)
            .arg(&path)
            .arg("stdout")
            .output()
            .await
            .map_err(|e| AppError::Extraction(format!("Error extracting text from image: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Extraction(format!(
                "Error extracting text from image: {}",
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, filename: &str, data: &[u8]) -> Result<String, AppError> {
        let ext = file_extension(filename)
            .ok_or_else(|| AppError::Validation("Filename has no extension".to_string()))?;

        match ext.as_str() {
            "pdf" => self.extract_pdf(data).await,
            e if IMAGE_EXTENSIONS.contains(&e) => self.extract_image(data, e).await,
            other => Err(AppError::Validation(format!(
                "Unsupported file type: {other}"
            ))),
        }
    }
}
