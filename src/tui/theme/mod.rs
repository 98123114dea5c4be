//! Theme system — configurable color schemes for the TUI.

pub mod builtin;
pub mod config;

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Editor
    pub editor_fg: Color,
    pub editor_bg: Color,
    pub editor_cursor: Color,
    pub editor_line_number: Color,
    pub editor_active_line: Color,

    // Syntax highlighting
    pub editor_keyword: Color,
    pub editor_string: Color,
    pub editor_number: Color,
    pub editor_comment: Color,
    pub editor_preprocessor: Color,

    // Error marker
    pub marker_error: Color,

    // Token stream panel
    pub token_directive: Color,
    pub token_literal: Color,
    pub token_identifier: Color,
    pub token_operator: Color,
    pub token_other: Color,

    // Syntax tree panel
    pub tree_kind: Color,
    pub tree_field: Color,
    pub tree_leaf: Color,

    // Status bar
    pub status_fg: Color,
    pub status_bg: Color,
    pub status_accent: Color,
    pub status_ok: Color,
    pub status_error: Color,

    // Notification console
    pub notice_info: Color,
    pub notice_success: Color,
    pub notice_error: Color,

    // Help
    pub help_key: Color,
    pub help_desc: Color,

    // Borders & chrome
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
}

/// Load a theme: tries YAML config first, falls back to the default builtin.
pub fn load_theme() -> Theme {
    config::load_theme_from_yaml().unwrap_or_else(builtin::default)
}

/// Cycle to the next theme in the list, wrapping around.
pub fn cycle_theme(current: &Theme, themes: &[Theme]) -> Theme {
    if themes.is_empty() {
        return current.clone();
    }
    let idx = themes
        .iter()
        .position(|t| t.name == current.name)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    themes[idx].clone()
}
