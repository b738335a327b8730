//! The structured-item transformer.
//!
//! Converts an ordered sequence of typed content items into blocks. Bare
//! strings are paragraph shorthand; tagged records dispatch on a closed
//! alias table; toggles recurse into their children up to a bounded depth.
//! Unrecognized kinds degrade to paragraphs with a diagnostic, never a
//! rejection.

use serde::Deserialize;
use serde_json::Value;

use super::TransformError;
use crate::blocks::{Block, DEFAULT_CALLOUT_ICON, DEFAULT_CODE_LANGUAGE};
use crate::diag::{Diagnostic, DiagnosticSink};
use crate::theme::{self, ThemeElement};

/// Nesting depth beyond which toggle children are flattened into their
/// parent's level instead of recursed into.
pub const MAX_NESTING: usize = 64;

/// Truncation bound for invalid-item previews carried in diagnostics.
const PREVIEW_LEN: usize = 100;

/// One unit of structured input; a bare string is paragraph shorthand.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Text(String),
    Item(ItemRecord),
}

/// A tagged content record.
///
/// `type` and `content` are accepted as aliases for the canonical `kind`
/// and `text` field names; unknown extra fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemRecord {
    #[serde(alias = "type")]
    pub kind: Option<String>,
    #[serde(alias = "content")]
    pub text: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub checked: Option<bool>,
    pub language: Option<String>,
    pub children: Option<Value>,
}

/// Canonical kinds reachable from item kind tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Bulleted,
    Numbered,
    ToDo,
    Toggle,
    Callout,
    Divider,
    Code,
}

/// Closed table of accepted kind spellings.
const KIND_ALIASES: &[(&str, ItemKind)] = &[
    ("paragraph", ItemKind::Paragraph),
    ("heading_1", ItemKind::Heading1),
    ("heading1", ItemKind::Heading1),
    ("heading_2", ItemKind::Heading2),
    ("heading2", ItemKind::Heading2),
    ("heading_3", ItemKind::Heading3),
    ("heading3", ItemKind::Heading3),
    ("bulleted_list_item", ItemKind::Bulleted),
    ("bullet", ItemKind::Bulleted),
    ("numbered_list_item", ItemKind::Numbered),
    ("number", ItemKind::Numbered),
    ("to_do", ItemKind::ToDo),
    ("todo", ItemKind::ToDo),
    ("toggle", ItemKind::Toggle),
    ("callout", ItemKind::Callout),
    ("divider", ItemKind::Divider),
    ("code", ItemKind::Code),
];

impl ItemKind {
    fn from_alias(tag: &str) -> Option<Self> {
        KIND_ALIASES
            .iter()
            .find(|(alias, _)| *alias == tag)
            .map(|&(_, kind)| kind)
    }
}

/// Transforms a typed item sequence into blocks.
///
/// Total over well-formed items; degraded input becomes fallback blocks
/// plus diagnostics. Errs only on an internal invariant violation.
pub fn transform_items(
    items: &[ContentItem],
    theme: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Block>, TransformError> {
    let mut blocks = Vec::with_capacity(items.len());
    for item in items {
        push_item(item, theme, sink, 0, &mut blocks)?;
    }
    Ok(blocks)
}

/// Value-level variant used by the shape-detecting entry point and by
/// toggle-children recursion.
pub(crate) fn transform_values(
    values: &[Value],
    theme: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Block>, TransformError> {
    let mut blocks = Vec::with_capacity(values.len());
    transform_values_into(values, theme, sink, 0, &mut blocks)?;
    Ok(blocks)
}

fn transform_values_into(
    values: &[Value],
    theme: &str,
    sink: &dyn DiagnosticSink,
    depth: usize,
    out: &mut Vec<Block>,
) -> Result<(), TransformError> {
    if depth > MAX_NESTING {
        return Err(TransformError::Invariant(format!(
            "nesting depth {depth} exceeds the cap of {MAX_NESTING}"
        )));
    }
    for value in values {
        match ContentItem::deserialize(value) {
            Ok(item) => push_item(&item, theme, sink, depth, out)?,
            Err(_) => sink.emit(Diagnostic::InvalidItem {
                preview: preview(value),
            }),
        }
    }
    Ok(())
}

fn push_item(
    item: &ContentItem,
    theme: &str,
    sink: &dyn DiagnosticSink,
    depth: usize,
    out: &mut Vec<Block>,
) -> Result<(), TransformError> {
    let record = match item {
        ContentItem::Text(text) => {
            out.push(Block::paragraph(text.clone()));
            return Ok(());
        }
        ContentItem::Item(record) => record,
    };

    let Some(tag) = record.kind.as_deref() else {
        sink.emit(Diagnostic::InvalidItem {
            preview: format!("{record:?}").chars().take(PREVIEW_LEN).collect(),
        });
        return Ok(());
    };

    let text = record.text.clone().unwrap_or_default();
    let Some(kind) = ItemKind::from_alias(tag) else {
        sink.emit(Diagnostic::UnknownItemKind {
            kind: tag.to_string(),
        });
        out.push(Block::paragraph(text));
        return Ok(());
    };

    match kind {
        ItemKind::Paragraph => out.push(Block::paragraph(text)),
        ItemKind::Heading1 => out.push(Block::heading(1, text)),
        ItemKind::Heading2 => out.push(Block::heading(2, text)),
        ItemKind::Heading3 => out.push(Block::heading(3, text)),
        ItemKind::Bulleted => out.push(Block::bulleted(text)),
        ItemKind::Numbered => out.push(Block::numbered(text)),
        ItemKind::ToDo => out.push(Block::to_do(text, record.checked == Some(true))),
        ItemKind::Toggle => push_toggle(record, text, theme, sink, depth, out)?,
        ItemKind::Callout => {
            let icon = record
                .icon
                .clone()
                .unwrap_or_else(|| DEFAULT_CALLOUT_ICON.to_string());
            let color = record
                .color
                .clone()
                .unwrap_or_else(|| theme::resolve_color(theme, ThemeElement::Callout).to_string());
            out.push(Block::callout(text, icon, color));
        }
        ItemKind::Divider => out.push(Block::divider()),
        ItemKind::Code => {
            let language = record
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string());
            out.push(Block::code(text, language));
        }
    }
    Ok(())
}

fn push_toggle(
    record: &ItemRecord,
    title: String,
    theme: &str,
    sink: &dyn DiagnosticSink,
    depth: usize,
    out: &mut Vec<Block>,
) -> Result<(), TransformError> {
    // Children only count when the field is present and itself a sequence.
    match record.children.as_ref().and_then(Value::as_array) {
        Some(values) if depth < MAX_NESTING => {
            let mut children = Vec::with_capacity(values.len());
            transform_values_into(values, theme, sink, depth + 1, &mut children)?;
            out.push(Block::toggle(title, children));
        }
        Some(values) => {
            // At the cap: keep the toggle, flatten its children to this level.
            out.push(Block::toggle(title, Vec::new()));
            transform_values_into(values, theme, sink, depth, out)?;
        }
        None => out.push(Block::toggle(title, Vec::new())),
    }
    Ok(())
}

fn preview(value: &Value) -> String {
    value.to_string().chars().take(PREVIEW_LEN).collect()
}
