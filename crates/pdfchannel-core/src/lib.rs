//! Platform-channel glue for PDF text extraction.
//!
//! This crate is the shared half of a bridge handler: it receives an
//! `extractText` method invocation (a method name plus a loose argument
//! bag), routes it, delegates the actual parsing to a pluggable PDF
//! backend, and returns the concatenated page text or a coded error. The
//! heavy lifting belongs to the backend's PDF library; this crate is the
//! dispatch and policy layer around it.

pub mod backend;
pub mod channel;
pub mod config_file;
pub mod extract;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::{BackendError, PdfBackend, PdfPages};
pub use channel::{CHANNEL_NAME, METHOD_EXTRACT_TEXT, MethodCall, MethodResponse, dispatch};
pub use extract::{DocumentSource, ExtractError, extract_text};
