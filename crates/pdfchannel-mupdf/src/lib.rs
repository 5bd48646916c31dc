use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pdfchannel_core::{BackendError, PdfBackend, PdfPages};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the channel core and the pure-Rust backend
/// do not transitively depend on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn name(&self) -> &'static str {
        "mupdf"
    }

    fn open_path(&self, path: &Path) -> Result<Box<dyn PdfPages>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::Open("invalid path encoding".into()))?;
        let document =
            Document::open(path_str).map_err(|e| BackendError::Open(e.to_string()))?;
        MupdfPages::boxed(document)
    }

    fn open_bytes(&self, bytes: &[u8]) -> Result<Box<dyn PdfPages>, BackendError> {
        let document =
            Document::from_bytes(bytes, "pdf").map_err(|e| BackendError::Open(e.to_string()))?;
        MupdfPages::boxed(document)
    }
}

struct MupdfPages {
    document: Document,
    page_count: usize,
}

impl MupdfPages {
    fn boxed(document: Document) -> Result<Box<dyn PdfPages>, BackendError> {
        // A document the library cannot page-count was never usable; treat
        // it as an open failure.
        let page_count = document
            .page_count()
            .map_err(|e| BackendError::Open(e.to_string()))? as usize;
        Ok(Box::new(Self {
            document,
            page_count,
        }))
    }
}

impl PdfPages for MupdfPages {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        let page = self
            .document
            .load_page(index as i32)
            .map_err(|e| BackendError::Page(e.to_string()))?;
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(|e| BackendError::Page(e.to_string()))?;

        // Block/line iteration matches what the other text viewers built on
        // MuPDF report for a page.
        let mut page_text = String::new();
        for block in text_page.blocks() {
            for line in block.lines() {
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                page_text.push_str(&line_text);
                page_text.push('\n');
            }
        }
        Ok(page_text)
    }
}
