//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Category tabs --
    pub tab_normal: Style,
    pub tab_active: Style,

    // -- List head --
    pub banner: Style,
    pub no_results: Style,

    // -- Rows --
    pub row_category: Style,
    pub row_title: Style,
    pub row_cursor: Style,
    pub row_expanded: Style,
    pub answer_body: Style,

    // -- Search field --
    pub search_text: Style,
    pub search_placeholder: Style,
    pub search_clear: Style,

    // -- Pager --
    pub page_normal: Style,
    pub page_active: Style,

    // -- Chrome --
    pub heading: Style,
    pub status_bar: Style,
    pub status_error: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            tab_normal: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            banner: Style::default().fg(Color::Cyan),
            no_results: Style::default().fg(Color::DarkGray),

            row_category: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            row_title: Style::default(),
            row_cursor: Style::default().bg(Color::DarkGray).fg(Color::White),
            row_expanded: Style::default().add_modifier(Modifier::BOLD),
            answer_body: Style::default().fg(Color::Gray),

            search_text: Style::default(),
            search_placeholder: Style::default().fg(Color::DarkGray),
            search_clear: Style::default().fg(Color::Red),

            page_normal: Style::default().fg(Color::Gray),
            page_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),

            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            status_error: Style::default().bg(Color::DarkGray).fg(Color::LightRed),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    fn light() -> Self {
        Self {
            tab_normal: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            banner: Style::default().fg(Color::Blue),
            no_results: Style::default().fg(Color::DarkGray),

            row_category: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            row_title: Style::default().fg(Color::Black),
            row_cursor: Style::default().bg(Color::Blue).fg(Color::White),
            row_expanded: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            answer_body: Style::default().fg(Color::DarkGray),

            search_text: Style::default().fg(Color::Black),
            search_placeholder: Style::default().fg(Color::Gray),
            search_clear: Style::default().fg(Color::Red),

            page_normal: Style::default().fg(Color::DarkGray),
            page_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),

            heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            status_error: Style::default().bg(Color::White).fg(Color::Red),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 19] = [
    "tab_normal",
    "tab_active",
    "banner",
    "no_results",
    "row_category",
    "row_title",
    "row_cursor",
    "row_expanded",
    "answer_body",
    "search_text",
    "search_placeholder",
    "search_clear",
    "page_normal",
    "page_active",
    "heading",
    "status_bar",
    "status_error",
    "panel_border",
    "panel_border_focused",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 19] = [
            p.tab_normal,
            p.tab_active,
            p.banner,
            p.no_results,
            p.row_category,
            p.row_title,
            p.row_cursor,
            p.row_expanded,
            p.answer_body,
            p.search_text,
            p.search_placeholder,
            p.search_clear,
            p.page_normal,
            p.page_active,
            p.heading,
            p.status_bar,
            p.status_error,
            p.panel_border,
            p.panel_border_focused,
        ];

        let map = ROLE_NAMES.iter().copied().zip(styles).collect();
        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_str_name() {
        assert_eq!(ThemeVariant::from_str_name("dark"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::from_str_name("LIGHT"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::from_str_name("solarized"), None);
    }

    #[test]
    fn variant_cycles() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let map = StyleMap::from_palette(&ThemeVariant::Dark.palette());
        assert_eq!(map.resolve("tab_active").bg, Some(Color::Cyan));
        assert_eq!(map.resolve("status_bar").bg, Some(Color::DarkGray));
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let map = StyleMap::from_palette(&ThemeVariant::Dark.palette());
        assert_eq!(map.resolve("no_such_role"), Style::default());
    }

    #[test]
    fn style_map_has_all_roles() {
        let map = StyleMap::from_palette(&ThemeVariant::Light.palette());
        assert_eq!(map.map.len(), ROLE_NAMES.len());
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.row_cursor, light.row_cursor);
        assert_ne!(dark.status_bar, light.status_bar);
    }
}
