//! Core engine: compiles loosely-structured content into an ordered tree
//! of typed blocks for a hierarchical document API.
//!
//! Two front ends share one block model: the structured-item transformer
//! for typed content sequences and a line-oriented markdown parser for
//! freeform text. Everything is synchronous, allocation-local, and free of
//! cross-call state; malformed input degrades to best-effort blocks with
//! diagnostics instead of errors.

pub mod batch;
pub mod blocks;
pub mod diag;
pub mod options;
pub mod theme;
pub mod transform;

// Re-export key types for easier usage
pub use batch::{MAX_BLOCKS_PER_REQUEST, chunk_blocks};
pub use blocks::{Block, RichText};
pub use diag::{Diagnostic, DiagnosticSink, LogSink, MemorySink};
pub use options::{SelectOption, normalize_options};
pub use theme::{ThemeElement, resolve_color};
pub use transform::items::{ContentItem, ItemRecord, transform_items};
pub use transform::markdown::parse_markdown;
pub use transform::{TransformError, compile};
