//! Mock PDF backend for testing.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend, PdfPages};

/// One canned page served by [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockPage {
    /// Page whose extraction succeeds with this text.
    Text(String),
    /// Page whose extraction fails.
    Fails,
}

/// How the mock responds to `open_path` / `open_bytes`.
#[derive(Clone, Debug)]
enum OpenOutcome {
    Pages(Vec<MockPage>),
    FailsOpen(String),
    FailsIo(String),
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Serves a fixed page list (or a fixed open failure) and counts open
/// calls via [`open_calls()`](MockBackend::open_calls).
pub struct MockBackend {
    outcome: OpenOutcome,
    open_calls: AtomicUsize,
}

impl MockBackend {
    /// Create a mock whose document contains exactly these pages.
    pub fn with_pages(pages: Vec<MockPage>) -> Self {
        Self {
            outcome: OpenOutcome::Pages(pages),
            open_calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose open step rejects the input as unparseable.
    pub fn failing_open(message: &str) -> Self {
        Self {
            outcome: OpenOutcome::FailsOpen(message.to_string()),
            open_calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose open step fails with an I/O error.
    pub fn failing_open_io(message: &str) -> Self {
        Self {
            outcome: OpenOutcome::FailsIo(message.to_string()),
            open_calls: AtomicUsize::new(0),
        }
    }

    /// How many times either open method was invoked.
    pub fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }

    fn open(&self) -> Result<Box<dyn PdfPages>, BackendError> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            OpenOutcome::Pages(pages) => Ok(Box::new(MockPages {
                pages: pages.clone(),
            })),
            OpenOutcome::FailsOpen(msg) => Err(BackendError::Open(msg.clone())),
            OpenOutcome::FailsIo(msg) => Err(BackendError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                msg.clone(),
            ))),
        }
    }
}

impl PdfBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn open_path(&self, _path: &Path) -> Result<Box<dyn PdfPages>, BackendError> {
        self.open()
    }

    fn open_bytes(&self, _bytes: &[u8]) -> Result<Box<dyn PdfPages>, BackendError> {
        self.open()
    }
}

struct MockPages {
    pages: Vec<MockPage>,
}

impl PdfPages for MockPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        match self.pages.get(index) {
            Some(MockPage::Text(text)) => Ok(text.clone()),
            Some(MockPage::Fails) => Err(BackendError::Page(format!(
                "mock page {} refuses to extract",
                index
            ))),
            None => Err(BackendError::Page(format!("page {} out of range", index))),
        }
    }
}
