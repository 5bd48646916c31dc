use std::path::Path;

use thiserror::Error;

/// Errors surfaced by a PDF backend.
///
/// `Open` means the library rejected the input outright. `Page` is scoped
/// to a single page and is absorbed by the extraction adapter rather than
/// failing the call. Anything else rides on `Io`.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract page text: {0}")]
    Page(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level library glue (open a document, read
/// one page's text); the call flow around it (source selection, page
/// iteration, the empty-result check) lives in [`crate::extract`].
pub trait PdfBackend: Send + Sync {
    /// Backend identifier, used for selection and logging.
    fn name(&self) -> &'static str;

    /// Open a document from a file on disk.
    fn open_path(&self, path: &Path) -> Result<Box<dyn PdfPages>, BackendError>;

    /// Open a document from in-memory bytes.
    fn open_bytes(&self, bytes: &[u8]) -> Result<Box<dyn PdfPages>, BackendError>;
}

/// An opened document, scoped to a single extraction call.
///
/// The handle is dropped at the end of that call on every exit path;
/// implementations must not hold state that outlives it.
pub trait PdfPages {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the text of one page (0-based index, document order).
    fn page_text(&self, index: usize) -> Result<String, BackendError>;
}
