//! Theme-to-color resolution.
//!
//! A theme names a fixed row in a static color table; unknown theme names
//! fall back to the `default` row. The table is process-wide constant data.

/// Element kinds a theme assigns display colors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeElement {
    Callout,
    Highlight,
    Primary,
}

struct ThemeRow {
    name: &'static str,
    callout: &'static str,
    highlight: &'static str,
    primary: &'static str,
}

// First row is the fallback for unknown theme names.
static THEMES: &[ThemeRow] = &[
    ThemeRow {
        name: "default",
        callout: "gray_background",
        highlight: "yellow_background",
        primary: "blue",
    },
    ThemeRow {
        name: "blue",
        callout: "blue_background",
        highlight: "blue_background",
        primary: "blue",
    },
    ThemeRow {
        name: "green",
        callout: "green_background",
        highlight: "green_background",
        primary: "green",
    },
    ThemeRow {
        name: "red",
        callout: "red_background",
        highlight: "red_background",
        primary: "red",
    },
    ThemeRow {
        name: "purple",
        callout: "purple_background",
        highlight: "purple_background",
        primary: "purple",
    },
    ThemeRow {
        name: "pink",
        callout: "pink_background",
        highlight: "pink_background",
        primary: "pink",
    },
    ThemeRow {
        name: "yellow",
        callout: "yellow_background",
        highlight: "yellow_background",
        primary: "yellow",
    },
    ThemeRow {
        name: "orange",
        callout: "orange_background",
        highlight: "orange_background",
        primary: "orange",
    },
    ThemeRow {
        name: "brown",
        callout: "brown_background",
        highlight: "brown_background",
        primary: "brown",
    },
    ThemeRow {
        name: "gray",
        callout: "gray_background",
        highlight: "gray_background",
        primary: "gray",
    },
];

/// Resolves the display color for `element` under `theme`.
///
/// Total: unknown theme names resolve through the `default` row.
pub fn resolve_color(theme: &str, element: ThemeElement) -> &'static str {
    let row = THEMES
        .iter()
        .find(|row| row.name == theme)
        .unwrap_or(&THEMES[0]);
    match element {
        ThemeElement::Callout => row.callout,
        ThemeElement::Highlight => row.highlight,
        ThemeElement::Primary => row.primary,
    }
}
