//! Content-to-block compilation entry points.
//!
//! Two alternate front ends terminate in the same block tree: the
//! structured-item transformer ([`items`]) for typed content sequences, and
//! the line-oriented markdown parser ([`markdown`]) for freeform text.
//! [`compile`] detects the input shape and dispatches.

pub mod items;
pub mod markdown;

use serde_json::Value;

use crate::blocks::Block;
use crate::diag::{Diagnostic, DiagnosticSink};

/// Raised only when an internal invariant is violated. Malformed caller
/// input never raises; it degrades to best-effort blocks plus diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// A markdown-format payload carried no textual content.
    #[error("markdown payload has no text content")]
    MissingMarkdownContent,
    /// Defensive: an internal invariant did not hold.
    #[error("transformation invariant violated: {0}")]
    Invariant(String),
}

/// Paragraph text used when nothing textual can be extracted from input.
const UNAVAILABLE_TEXT: &str = "Content unavailable";

/// Compiles an untyped content payload into an ordered block sequence.
///
/// Shape detection: a `{format: "markdown", content}` envelope dispatches
/// to the markdown parser, a sequence dispatches to the item transformer,
/// and anything else degrades to a single best-effort paragraph.
pub fn compile(
    content: &Value,
    theme: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Block>, TransformError> {
    if let Some(fields) = content.as_object()
        && fields.get("format").and_then(Value::as_str) == Some("markdown")
    {
        let text = fields
            .get("content")
            .and_then(Value::as_str)
            .ok_or(TransformError::MissingMarkdownContent)?;
        return Ok(markdown::parse_markdown(text));
    }

    match content.as_array() {
        Some(values) => items::transform_values(values, theme, sink),
        None => {
            sink.emit(Diagnostic::NonSequenceContent);
            let text = content.as_str().unwrap_or(UNAVAILABLE_TEXT);
            Ok(vec![Block::paragraph(text)])
        }
    }
}
