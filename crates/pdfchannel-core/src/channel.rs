//! Method-channel dispatch for the `extractText` operation.
//!
//! The envelope mirrors what a cross-runtime bridge delivers: a method name
//! and a loose JSON argument bag. Responses are a tagged envelope so any
//! host (FFI shim, test harness, CLI) can ship them over its own wire.

use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::PdfBackend;
use crate::extract::{self, DocumentSource, ExtractError};

/// Name of the bridge channel this crate serves.
pub const CHANNEL_NAME: &str = "pdfchannel/pdf";

/// The single method this channel implements.
pub const METHOD_EXTRACT_TEXT: &str = "extractText";

/// An inbound method invocation: a method name plus an argument bag.
///
/// The bag carries optional `path` (string) and optional `bytes`; `bytes`
/// is accepted either as an array of integers 0–255 or as a base64 string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Outcome of a dispatch, serialized as a tagged envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResponse {
    /// The call succeeded; `result` holds the extracted text.
    Success { result: Value },
    /// The call failed with a stable code and a human-readable message.
    Error { code: String, message: String },
    /// The method name is not one this channel implements.
    NotImplemented,
}

impl MethodResponse {
    /// The error code, if this is an error response.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            MethodResponse::Error { code, .. } => Some(code),
            _ => None,
        }
    }

    fn from_extract(result: Result<String, ExtractError>) -> Self {
        match result {
            Ok(text) => MethodResponse::Success {
                result: Value::String(text),
            },
            Err(e) => MethodResponse::Error {
                code: e.code().to_string(),
                message: e.to_string(),
            },
        }
    }
}

/// Route a method call to the extraction adapter.
///
/// Unknown methods get the bridge-level not-implemented response;
/// everything else comes back as success text or a coded error. Never
/// panics on malformed input.
pub fn dispatch(call: &MethodCall, backend: &dyn PdfBackend) -> MethodResponse {
    if call.method != METHOD_EXTRACT_TEXT {
        return MethodResponse::NotImplemented;
    }

    let Some(args) = call.args.as_object() else {
        return arg_error("arguments required");
    };

    // Bytes win over path when a caller supplies both.
    let source = if let Some(bytes) = args.get("bytes").and_then(decode_bytes) {
        DocumentSource::Bytes(bytes)
    } else if let Some(path) = args
        .get("path")
        .and_then(Value::as_str)
        .filter(|p| !p.trim().is_empty())
    {
        DocumentSource::Path(PathBuf::from(path))
    } else {
        return arg_error("path or bytes is required");
    };

    tracing::debug!(
        backend = backend.name(),
        source = source.kind(),
        "dispatching extractText"
    );
    MethodResponse::from_extract(extract::extract_text(backend, &source))
}

fn arg_error(message: &str) -> MethodResponse {
    MethodResponse::from_extract(Err(ExtractError::Arg(message.to_string())))
}

/// Decode the `bytes` argument. A value of the wrong shape is treated as
/// absent, matching the bag's first-match looseness.
fn decode_bytes(value: &Value) -> Option<Vec<u8>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect(),
        Value::String(s) => BASE64.decode(s).ok(),
        _ => None,
    }
}
