//! The cross-line accumulation state machine.
//!
//! Carries the three open-region states (list run, code fence, toggle)
//! across lines and flushes them at boundaries. At most one region is
//! actively written per line, but a toggle may stay open while blocks
//! accumulate inside it; completed blocks route to the open toggle's
//! children instead of the top-level output.

use super::classify::{LineClass, LineKind, ListKind};
use crate::blocks::Block;

/// An accumulating run of same-kind list items.
#[derive(Debug)]
struct OpenList {
    kind: ListKind,
    items: Vec<Block>,
}

/// An open fenced code region. While open, every line is literal text.
#[derive(Debug)]
struct OpenCode {
    language: String,
    lines: Vec<String>,
}

/// An open toggle collecting child blocks.
#[derive(Debug)]
struct OpenToggle {
    title: String,
    children: Vec<Block>,
}

/// Builds the block sequence from classified lines.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    out: Vec<Block>,
    list: Option<OpenList>,
    code: Option<OpenCode>,
    toggle: Option<OpenToggle>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &LineClass) {
        // An open fence swallows everything except its closing marker.
        if self.code.is_some() {
            if matches!(line.kind, LineKind::Fence { .. }) {
                self.close_code();
            } else if let Some(code) = &mut self.code {
                code.lines.push(line.raw.clone());
            }
            return;
        }

        match &line.kind {
            // A blank line finishes the most recent open unit first: the
            // list run, then a toggle that has collected children.
            LineKind::Blank => {
                self.flush_list();
                self.flush_toggle();
            }
            LineKind::Fence { language } => {
                self.code = Some(OpenCode {
                    language: language.clone(),
                    lines: Vec::new(),
                });
            }
            // Toggles do not nest at the text level: a new marker flushes
            // the previous toggle before opening its own.
            LineKind::ToggleOpen { title } => {
                self.flush_toggle();
                self.toggle = Some(OpenToggle {
                    title: title.clone(),
                    children: Vec::new(),
                });
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.emit(Block::heading(*level, text.clone()));
            }
            LineKind::ToDo { checked, text } => self.emit(Block::to_do(text.clone(), *checked)),
            LineKind::ListItem { kind, text } => self.push_list_item(*kind, text.clone()),
            LineKind::Callout { icon, color, text } => {
                self.emit(Block::callout(text.clone(), icon.clone(), color.clone()));
            }
            LineKind::Divider => self.emit(Block::divider()),
            LineKind::Text { text } => self.emit(Block::paragraph(text.clone())),
        }
    }

    /// End of input. Flush order is innermost first: an unterminated fence
    /// closes as if its marker had appeared, then the list run, then the
    /// toggle.
    pub fn finish(mut self) -> Vec<Block> {
        self.close_code();
        self.flush_list();
        self.flush_toggle();
        self.out
    }

    /// Routes a completed block into the open toggle, or to the top level.
    fn emit(&mut self, block: Block) {
        match &mut self.toggle {
            Some(toggle) => toggle.children.push(block),
            None => self.out.push(block),
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: String) {
        let item = match kind {
            ListKind::Bulleted => Block::bulleted(text),
            ListKind::Numbered => Block::numbered(text),
        };
        // Inside a toggle, items append eagerly instead of grouping into a
        // run; order is preserved either way.
        if let Some(toggle) = &mut self.toggle {
            toggle.children.push(item);
            return;
        }
        match &mut self.list {
            Some(list) if list.kind == kind => list.items.push(item),
            _ => {
                self.flush_list();
                self.list = Some(OpenList {
                    kind,
                    items: vec![item],
                });
            }
        }
    }

    /// List runs always flush to the top level: items only accumulate
    /// outside a toggle.
    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.out.extend(list.items);
        }
    }

    /// A toggle completes only once it has children; an empty one stays
    /// open until content arrives, or is discarded by a newer marker or
    /// end of input.
    fn flush_toggle(&mut self) {
        let Some(toggle) = self.toggle.take() else {
            return;
        };
        if toggle.children.is_empty() {
            self.toggle = Some(toggle);
            return;
        }
        self.out.push(Block::toggle(toggle.title, toggle.children));
    }

    fn close_code(&mut self) {
        if let Some(code) = self.code.take() {
            self.emit(Block::code(code.lines.join("\n"), code.language));
        }
    }
}
