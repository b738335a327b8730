//! The output block model.
//!
//! One [`Block`] is one node in the compiled document tree. Ownership is
//! strictly tree-shaped: only toggles own children, and every block sits at
//! exactly one position in exactly one tree. Both compiler front ends (the
//! structured-item transformer and the markdown parser) terminate in this
//! representation, so all block construction lives here.

pub mod wire;

/// Icon glyph used for callouts that do not supply their own.
pub const DEFAULT_CALLOUT_ICON: &str = "💡";

/// Language tag used for code blocks that do not supply their own.
pub const DEFAULT_CODE_LANGUAGE: &str = "plain text";

/// The minimal text-bearing unit inside a block.
///
/// This engine only ever produces plain, unstyled spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    pub content: String,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// One node in the compiled document tree, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph {
        rich_text: Vec<RichText>,
    },
    /// Headings carry their depth (1..=3).
    Heading {
        level: u8,
        rich_text: Vec<RichText>,
    },
    BulletedListItem {
        rich_text: Vec<RichText>,
    },
    NumberedListItem {
        rich_text: Vec<RichText>,
    },
    ToDo {
        rich_text: Vec<RichText>,
        checked: bool,
    },
    /// The only kind that owns children.
    Toggle {
        rich_text: Vec<RichText>,
        children: Vec<Block>,
    },
    Callout {
        rich_text: Vec<RichText>,
        icon: String,
        color: String,
    },
    Divider,
    Code {
        rich_text: Vec<RichText>,
        language: String,
    },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            rich_text: vec![RichText::plain(text)],
        }
    }

    /// Builds a heading block, clamping the level into the supported range.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 3),
            rich_text: vec![RichText::plain(text)],
        }
    }

    pub fn bulleted(text: impl Into<String>) -> Self {
        Block::BulletedListItem {
            rich_text: vec![RichText::plain(text)],
        }
    }

    pub fn numbered(text: impl Into<String>) -> Self {
        Block::NumberedListItem {
            rich_text: vec![RichText::plain(text)],
        }
    }

    pub fn to_do(text: impl Into<String>, checked: bool) -> Self {
        Block::ToDo {
            rich_text: vec![RichText::plain(text)],
            checked,
        }
    }

    pub fn toggle(title: impl Into<String>, children: Vec<Block>) -> Self {
        Block::Toggle {
            rich_text: vec![RichText::plain(title)],
            children,
        }
    }

    pub fn callout(
        text: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Block::Callout {
            rich_text: vec![RichText::plain(text)],
            icon: icon.into(),
            color: color.into(),
        }
    }

    pub fn divider() -> Self {
        Block::Divider
    }

    pub fn code(text: impl Into<String>, language: impl Into<String>) -> Self {
        Block::Code {
            rich_text: vec![RichText::plain(text)],
            language: language.into(),
        }
    }

    /// The remote API's type name for this block.
    pub fn api_type(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { level: 1, .. } => "heading_1",
            Block::Heading { level: 2, .. } => "heading_2",
            Block::Heading { .. } => "heading_3",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::ToDo { .. } => "to_do",
            Block::Toggle { .. } => "toggle",
            Block::Callout { .. } => "callout",
            Block::Divider => "divider",
            Block::Code { .. } => "code",
        }
    }

    /// Plain text carried by this block, concatenated across spans.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Divider => String::new(),
            Block::Paragraph { rich_text }
            | Block::Heading { rich_text, .. }
            | Block::BulletedListItem { rich_text }
            | Block::NumberedListItem { rich_text }
            | Block::ToDo { rich_text, .. }
            | Block::Toggle { rich_text, .. }
            | Block::Callout { rich_text, .. }
            | Block::Code { rich_text, .. } => rich_text
                .iter()
                .map(|span| span.content.as_str())
                .collect(),
        }
    }

    /// Child blocks owned by this node (empty for every kind but toggle).
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Toggle { children, .. } => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_is_clamped() {
        assert_eq!(Block::heading(0, "t").api_type(), "heading_1");
        assert_eq!(Block::heading(7, "t").api_type(), "heading_3");
    }

    #[test]
    fn plain_text_concatenates_spans() {
        let block = Block::Paragraph {
            rich_text: vec![RichText::plain("a"), RichText::plain("b")],
        };
        assert_eq!(block.plain_text(), "ab");
    }

    #[test]
    fn divider_has_no_text() {
        assert_eq!(Block::divider().plain_text(), "");
    }

    #[test]
    fn only_toggles_own_children() {
        let toggle = Block::toggle("t", vec![Block::paragraph("child")]);
        assert_eq!(toggle.children().len(), 1);
        assert!(Block::paragraph("p").children().is_empty());
    }
}
