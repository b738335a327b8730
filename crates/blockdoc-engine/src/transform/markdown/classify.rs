//! Per-line classification: local facts only.
//!
//! Each line is classified independently, without reference to surrounding
//! context. The builder decides what a classification means given the open
//! fence/list/toggle state — a line that looks like a heading is still
//! literal text while a code fence is open.

use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::{DEFAULT_CALLOUT_ICON, DEFAULT_CODE_LANGUAGE};

/// Which list run a line continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// What a single trimmed line looks like in isolation.
///
/// Dispatch order matters: markers are ambiguous across categories, so the
/// first match wins. To-do markers are recognized before plain bullets, and
/// the bracket-Toggle marker before plain callouts.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Blank,
    Fence { language: String },
    ToggleOpen { title: String },
    Heading { level: u8, text: String },
    ToDo { checked: bool, text: String },
    ListItem { kind: ListKind, text: String },
    Callout { icon: String, color: String, text: String },
    Divider,
    Text { text: String },
}

/// A classified line. Keeps the raw text for fence accumulation.
#[derive(Debug, Clone)]
pub struct LineClass {
    pub raw: String,
    pub kind: LineKind,
}

/// The fence marker.
pub const FENCE: &str = "```";

/// Title used when a toggle marker yields no extractable title.
const DEFAULT_TOGGLE_TITLE: &str = "Details";

/// Callouts default to this color; themes only apply to structured items.
const DEFAULT_CALLOUT_COLOR: &str = "blue";

pub fn classify(raw: &str) -> LineClass {
    LineClass {
        raw: raw.trim_end_matches('\r').to_string(),
        kind: classify_trimmed(raw.trim()),
    }
}

fn classify_trimmed(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix(FENCE) {
        let language = rest.trim();
        return LineKind::Fence {
            language: if language.is_empty() {
                DEFAULT_CODE_LANGUAGE.to_string()
            } else {
                language.to_string()
            },
        };
    }
    if let Some(title) = toggle_title(line) {
        return LineKind::ToggleOpen { title };
    }
    for (prefix, level) in [("# ", 1u8), ("## ", 2), ("### ", 3)] {
        if let Some(text) = line.strip_prefix(prefix) {
            return LineKind::Heading {
                level,
                text: text.to_string(),
            };
        }
    }
    if let Some(text) = line.strip_prefix("- [ ] ") {
        return LineKind::ToDo {
            checked: false,
            text: text.to_string(),
        };
    }
    if let Some(text) = line
        .strip_prefix("- [x] ")
        .or_else(|| line.strip_prefix("- [X] "))
    {
        return LineKind::ToDo {
            checked: true,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::ListItem {
            kind: ListKind::Bulleted,
            text: text.to_string(),
        };
    }
    if let Some(text) = numbered_text(line) {
        return LineKind::ListItem {
            kind: ListKind::Numbered,
            text,
        };
    }
    if let Some(rest) = line.strip_prefix("> ") {
        return callout(rest);
    }
    if line == "---" {
        return LineKind::Divider;
    }
    LineKind::Text {
        text: line.to_string(),
    }
}

/// The three toggle-open surface syntaxes: a blockquote-style bracketed
/// `Toggle:` marker, a leading triangle glyph, and the HTML details idiom.
fn toggle_title(line: &str) -> Option<String> {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        [
            Regex::new(r"^>\s*\[.*?\]\s*Toggle:\s*(.*)").expect("invalid toggle pattern"),
            Regex::new(r"^▼\s*(.*)").expect("invalid toggle pattern"),
            Regex::new(r"^<details>.*<summary>(.*)</summary>").expect("invalid toggle pattern"),
        ]
    });

    for pattern in patterns {
        if let Some(caps) = pattern.captures(line) {
            let title = caps.get(1).map_or("", |m| m.as_str());
            return Some(if title.is_empty() {
                DEFAULT_TOGGLE_TITLE.to_string()
            } else {
                title.to_string()
            });
        }
    }
    None
}

fn numbered_text(line: &str) -> Option<String> {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    let marker = MARKER.get_or_init(|| Regex::new(r"^\d+\.\s").expect("invalid numbered pattern"));
    if !marker.is_match(line) {
        return None;
    }
    line.split_once('.')
        .map(|(_, text)| text.trim().to_string())
}

/// Callout text may lead with `[icon](color):` or a bare `[icon]` prefix.
fn callout(rest: &str) -> LineKind {
    static FULL: OnceLock<Regex> = OnceLock::new();
    static ICON_ONLY: OnceLock<Regex> = OnceLock::new();

    let mut icon = DEFAULT_CALLOUT_ICON.to_string();
    let mut color = DEFAULT_CALLOUT_COLOR.to_string();
    let mut text = rest.to_string();

    if rest.starts_with('[') {
        let full = FULL.get_or_init(|| {
            Regex::new(r"\[(.*?)\]\s*\((.*?)\)\s*:(.*)").expect("invalid callout pattern")
        });
        let icon_only = ICON_ONLY
            .get_or_init(|| Regex::new(r"^\[(.*?)\]:?\s*").expect("invalid callout pattern"));

        if let Some(caps) = full.captures(rest) {
            if !caps[1].is_empty() {
                icon = caps[1].to_string();
            }
            if !caps[2].is_empty() {
                color = caps[2].to_string();
            }
            text = caps[3].trim().to_string();
        } else if let Some(caps) = icon_only.captures(rest) {
            if !caps[1].is_empty() {
                icon = caps[1].to_string();
            }
            text = rest[caps.get(0).map_or(0, |m| m.end())..].to_string();
        }
    }

    LineKind::Callout { icon, color, text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind(line: &str) -> LineKind {
        classify(line).kind
    }

    #[test]
    fn blank_and_whitespace_lines() {
        assert_eq!(kind(""), LineKind::Blank);
        assert_eq!(kind("   \t"), LineKind::Blank);
    }

    #[test]
    fn fence_captures_language_or_defaults() {
        assert_eq!(
            kind("```rust"),
            LineKind::Fence {
                language: "rust".to_string()
            }
        );
        assert_eq!(
            kind("```"),
            LineKind::Fence {
                language: "plain text".to_string()
            }
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            kind("# One"),
            LineKind::Heading {
                level: 1,
                text: "One".to_string()
            }
        );
        assert_eq!(
            kind("## Two"),
            LineKind::Heading {
                level: 2,
                text: "Two".to_string()
            }
        );
        assert_eq!(
            kind("### Three"),
            LineKind::Heading {
                level: 3,
                text: "Three".to_string()
            }
        );
        // Four hashes is not a recognized heading.
        assert_eq!(
            kind("#### Four"),
            LineKind::Text {
                text: "#### Four".to_string()
            }
        );
    }

    #[test]
    fn to_do_markers_win_over_bullets() {
        assert_eq!(
            kind("- [ ] task"),
            LineKind::ToDo {
                checked: false,
                text: "task".to_string()
            }
        );
        assert_eq!(
            kind("- [x] done"),
            LineKind::ToDo {
                checked: true,
                text: "done".to_string()
            }
        );
        assert_eq!(
            kind("- [X] done"),
            LineKind::ToDo {
                checked: true,
                text: "done".to_string()
            }
        );
        assert_eq!(
            kind("- plain"),
            LineKind::ListItem {
                kind: ListKind::Bulleted,
                text: "plain".to_string()
            }
        );
    }

    #[test]
    fn list_markers() {
        assert_eq!(
            kind("* starred"),
            LineKind::ListItem {
                kind: ListKind::Bulleted,
                text: "starred".to_string()
            }
        );
        assert_eq!(
            kind("12. twelfth"),
            LineKind::ListItem {
                kind: ListKind::Numbered,
                text: "twelfth".to_string()
            }
        );
        assert_eq!(
            kind("1.missing space"),
            LineKind::Text {
                text: "1.missing space".to_string()
            }
        );
    }

    #[test]
    fn toggle_markers_in_three_syntaxes() {
        assert_eq!(
            kind("> [!] Toggle: More info"),
            LineKind::ToggleOpen {
                title: "More info".to_string()
            }
        );
        assert_eq!(
            kind("▼ Spoilers"),
            LineKind::ToggleOpen {
                title: "Spoilers".to_string()
            }
        );
        assert_eq!(
            kind("<details><summary>Advanced</summary>"),
            LineKind::ToggleOpen {
                title: "Advanced".to_string()
            }
        );
    }

    #[test]
    fn bare_toggle_marker_gets_the_placeholder_title() {
        assert_eq!(
            kind("▼"),
            LineKind::ToggleOpen {
                title: "Details".to_string()
            }
        );
    }

    #[test]
    fn callout_defaults() {
        assert_eq!(
            kind("> watch out"),
            LineKind::Callout {
                icon: "💡".to_string(),
                color: "blue".to_string(),
                text: "watch out".to_string()
            }
        );
    }

    #[test]
    fn callout_with_icon_and_color_prefix() {
        assert_eq!(
            kind("> [🔥](red): hot take"),
            LineKind::Callout {
                icon: "🔥".to_string(),
                color: "red".to_string(),
                text: "hot take".to_string()
            }
        );
    }

    #[test]
    fn callout_with_bare_icon_prefix() {
        assert_eq!(
            kind("> [⚠️] careful now"),
            LineKind::Callout {
                icon: "⚠️".to_string(),
                color: "blue".to_string(),
                text: "careful now".to_string()
            }
        );
    }

    #[test]
    fn bracket_toggle_is_not_a_callout() {
        assert!(matches!(
            kind("> [note] Toggle: hidden"),
            LineKind::ToggleOpen { .. }
        ));
    }

    #[test]
    fn divider_must_be_exact() {
        assert_eq!(kind("---"), LineKind::Divider);
        assert_eq!(
            kind("----"),
            LineKind::Text {
                text: "----".to_string()
            }
        );
    }

    #[test]
    fn indented_lines_classify_after_trimming() {
        assert!(matches!(kind("   # Indented"), LineKind::Heading { .. }));
    }

    #[test]
    fn raw_keeps_original_spacing() {
        let class = classify("    keep me");
        assert_eq!(class.raw, "    keep me");
    }
}
