use std::path::Path;

use lopdf::Document;

use pdfchannel_core::{BackendError, PdfBackend, PdfPages};

/// `lopdf`-based implementation of [`PdfBackend`].
///
/// Pure Rust: no native PDF library is linked. Text comes from lopdf's
/// built-in extractor, one page at a time so a broken page cannot take the
/// rest of the document down with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn open_path(&self, path: &Path) -> Result<Box<dyn PdfPages>, BackendError> {
        let document = Document::load(path).map_err(|e| BackendError::Open(e.to_string()))?;
        Ok(Box::new(LopdfPages::new(document)))
    }

    fn open_bytes(&self, bytes: &[u8]) -> Result<Box<dyn PdfPages>, BackendError> {
        let document = Document::load_mem(bytes).map_err(|e| BackendError::Open(e.to_string()))?;
        Ok(Box::new(LopdfPages::new(document)))
    }
}

struct LopdfPages {
    document: Document,
    /// Page numbers in document order (lopdf numbers pages from 1; the
    /// BTreeMap already iterates in ascending order).
    page_numbers: Vec<u32>,
}

impl LopdfPages {
    fn new(document: Document) -> Self {
        let page_numbers = document.get_pages().keys().copied().collect();
        Self {
            document,
            page_numbers,
        }
    }
}

impl PdfPages for LopdfPages {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        let number = self
            .page_numbers
            .get(index)
            .ok_or_else(|| BackendError::Page(format!("page {} out of range", index)))?;
        self.document
            .extract_text(&[*number])
            .map_err(|e| BackendError::Page(e.to_string()))
    }
}
