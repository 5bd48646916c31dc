use std::path::PathBuf;

use thiserror::Error;

use crate::backend::{BackendError, PdfBackend, PdfPages};

/// Where the document content comes from. Exactly one source per call.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl DocumentSource {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentSource::Path(_) => "path",
            DocumentSource::Bytes(_) => "bytes",
        }
    }
}

/// Extraction failure, one variant per wire code.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Missing or invalid arguments.
    #[error("{0}")]
    Arg(String),
    /// The path does not reference an existing file. Raised before any
    /// load attempt.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The backend's library could not parse the input as a PDF.
    #[error("{0}")]
    Load(String),
    /// Parsed fine, but no extractable text remained after trimming.
    #[error("No text found in PDF")]
    EmptyText,
    /// Catch-all for any other backend failure.
    #[error("{0}")]
    Backend(BackendError),
}

impl ExtractError {
    /// The stable error code reported across the channel.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::Arg(_) => "ARG_ERROR",
            ExtractError::NotFound(_) => "NOT_FOUND",
            ExtractError::Load(_) => "LOAD_ERROR",
            ExtractError::EmptyText => "EMPTY_TEXT",
            ExtractError::Backend(_) => "EXTRACT_ERROR",
        }
    }
}

/// Extract the concatenated text of every page of a PDF.
///
/// Pages are read in document order and joined with newlines. A page whose
/// extraction fails contributes nothing; partial output across the
/// remaining pages beats failing the whole call.
pub fn extract_text(
    backend: &dyn PdfBackend,
    source: &DocumentSource,
) -> Result<String, ExtractError> {
    let document = open_source(backend, source)?;

    let mut pages_text = Vec::new();
    for index in 0..document.page_count() {
        match document.page_text(index) {
            Ok(text) => pages_text.push(text),
            Err(e) => {
                tracing::debug!(page = index, error = %e, "skipping page that failed to extract");
            }
        }
    }

    let text = pages_text.join("\n");
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyText);
    }
    Ok(text)
}

fn open_source(
    backend: &dyn PdfBackend,
    source: &DocumentSource,
) -> Result<Box<dyn PdfPages>, ExtractError> {
    match source {
        DocumentSource::Path(path) => {
            if !path.exists() {
                return Err(ExtractError::NotFound(path.clone()));
            }
            backend.open_path(path).map_err(|e| match e {
                BackendError::Open(msg) => ExtractError::Load(format!(
                    "Failed to load PDF from: {}: {}",
                    path.display(),
                    msg
                )),
                other => ExtractError::Backend(other),
            })
        }
        DocumentSource::Bytes(bytes) => backend.open_bytes(bytes).map_err(|e| match e {
            BackendError::Open(msg) => {
                ExtractError::Load(format!("Failed to load PDF from bytes: {}", msg))
            }
            other => ExtractError::Backend(other),
        }),
    }
}
