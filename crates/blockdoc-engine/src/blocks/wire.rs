//! Serialization into the remote document API's JSON block schema.
//!
//! Every block serializes to the envelope
//! `{"object": "block", "type": <name>, <name>: {payload}}` and rich-text
//! spans to the plain-text span shape, so a compiled sequence can be sent
//! to the API without a separate mapping step.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use super::{Block, RichText};

impl Serialize for RichText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Text<'a> {
            content: &'a str,
        }

        let mut span = serializer.serialize_struct("RichText", 2)?;
        span.serialize_field("type", "text")?;
        span.serialize_field(
            "text",
            &Text {
                content: &self.content,
            },
        )?;
        span.end()
    }
}

#[derive(serde::Serialize)]
struct TextPayload<'a> {
    rich_text: &'a [RichText],
}

#[derive(serde::Serialize)]
struct ToDoPayload<'a> {
    rich_text: &'a [RichText],
    checked: bool,
}

#[derive(serde::Serialize)]
struct TogglePayload<'a> {
    rich_text: &'a [RichText],
    #[serde(skip_serializing_if = "no_children")]
    children: &'a [Block],
}

fn no_children(children: &&[Block]) -> bool {
    children.is_empty()
}

#[derive(serde::Serialize)]
struct IconPayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    emoji: &'a str,
}

#[derive(serde::Serialize)]
struct CalloutPayload<'a> {
    rich_text: &'a [RichText],
    icon: IconPayload<'a>,
    color: &'a str,
}

#[derive(serde::Serialize)]
struct CodePayload<'a> {
    rich_text: &'a [RichText],
    language: &'a str,
}

#[derive(serde::Serialize)]
struct EmptyPayload {}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.api_type();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", name)?;
        match self {
            Block::Paragraph { rich_text }
            | Block::Heading { rich_text, .. }
            | Block::BulletedListItem { rich_text }
            | Block::NumberedListItem { rich_text } => {
                map.serialize_entry(name, &TextPayload { rich_text })?;
            }
            Block::ToDo { rich_text, checked } => {
                map.serialize_entry(
                    name,
                    &ToDoPayload {
                        rich_text,
                        checked: *checked,
                    },
                )?;
            }
            Block::Toggle {
                rich_text,
                children,
            } => {
                map.serialize_entry(
                    name,
                    &TogglePayload {
                        rich_text,
                        children,
                    },
                )?;
            }
            Block::Callout {
                rich_text,
                icon,
                color,
            } => {
                map.serialize_entry(
                    name,
                    &CalloutPayload {
                        rich_text,
                        icon: IconPayload {
                            kind: "emoji",
                            emoji: icon,
                        },
                        color,
                    },
                )?;
            }
            Block::Divider => {
                map.serialize_entry(name, &EmptyPayload {})?;
            }
            Block::Code {
                rich_text,
                language,
            } => {
                map.serialize_entry(
                    name,
                    &CodePayload {
                        rich_text,
                        language,
                    },
                )?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::blocks::Block;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn to_value(block: &Block) -> serde_json::Value {
        serde_json::to_value(block).expect("block serialization is infallible")
    }

    #[test]
    fn paragraph_envelope() {
        assert_eq!(
            to_value(&Block::paragraph("hello")),
            json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{"type": "text", "text": {"content": "hello"}}]
                }
            })
        );
    }

    #[test]
    fn heading_envelope_uses_numbered_type_name() {
        assert_eq!(
            to_value(&Block::heading(2, "title")),
            json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": {
                    "rich_text": [{"type": "text", "text": {"content": "title"}}]
                }
            })
        );
    }

    #[test]
    fn to_do_carries_checked_flag() {
        assert_eq!(
            to_value(&Block::to_do("task", true)),
            json!({
                "object": "block",
                "type": "to_do",
                "to_do": {
                    "rich_text": [{"type": "text", "text": {"content": "task"}}],
                    "checked": true
                }
            })
        );
    }

    #[test]
    fn toggle_nests_children_and_omits_empty() {
        assert_eq!(
            to_value(&Block::toggle("more", vec![Block::divider()])),
            json!({
                "object": "block",
                "type": "toggle",
                "toggle": {
                    "rich_text": [{"type": "text", "text": {"content": "more"}}],
                    "children": [
                        {"object": "block", "type": "divider", "divider": {}}
                    ]
                }
            })
        );
        assert_eq!(
            to_value(&Block::toggle("empty", vec![])),
            json!({
                "object": "block",
                "type": "toggle",
                "toggle": {
                    "rich_text": [{"type": "text", "text": {"content": "empty"}}]
                }
            })
        );
    }

    #[test]
    fn callout_wraps_icon_as_emoji() {
        assert_eq!(
            to_value(&Block::callout("note", "⚠️", "red_background")),
            json!({
                "object": "block",
                "type": "callout",
                "callout": {
                    "rich_text": [{"type": "text", "text": {"content": "note"}}],
                    "icon": {"type": "emoji", "emoji": "⚠️"},
                    "color": "red_background"
                }
            })
        );
    }

    #[test]
    fn code_carries_language() {
        assert_eq!(
            to_value(&Block::code("let x = 1;", "rust")),
            json!({
                "object": "block",
                "type": "code",
                "code": {
                    "rich_text": [{"type": "text", "text": {"content": "let x = 1;"}}],
                    "language": "rust"
                }
            })
        );
    }
}
