//! Theme YAML config — load custom themes from ~/.parseview/theme.yaml.

use ratatui::style::Color;
use serde::Deserialize;

use super::Theme;

/// Intermediate YAML representation — all fields optional.
#[derive(Debug, Deserialize)]
struct ThemeConfig {
    name: Option<String>,

    editor_fg: Option<String>,
    editor_bg: Option<String>,
    editor_cursor: Option<String>,
    editor_line_number: Option<String>,
    editor_active_line: Option<String>,

    editor_keyword: Option<String>,
    editor_string: Option<String>,
    editor_number: Option<String>,
    editor_comment: Option<String>,
    editor_preprocessor: Option<String>,

    marker_error: Option<String>,

    token_directive: Option<String>,
    token_literal: Option<String>,
    token_identifier: Option<String>,
    token_operator: Option<String>,
    token_other: Option<String>,

    tree_kind: Option<String>,
    tree_field: Option<String>,
    tree_leaf: Option<String>,

    status_fg: Option<String>,
    status_bg: Option<String>,
    status_accent: Option<String>,
    status_ok: Option<String>,
    status_error: Option<String>,

    notice_info: Option<String>,
    notice_success: Option<String>,
    notice_error: Option<String>,

    help_key: Option<String>,
    help_desc: Option<String>,

    border: Option<String>,
    border_focused: Option<String>,
    title: Option<String>,
}

/// Parse a color string: "#RRGGBB" hex or named color.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

/// Load a custom theme from ~/.parseview/theme.yaml.
/// Returns None if the file doesn't exist or can't be parsed.
pub fn load_theme_from_yaml() -> Option<Theme> {
    let home = dirs::home_dir()?;
    let path = home.join(".parseview").join("theme.yaml");
    let content = std::fs::read_to_string(path).ok()?;
    parse_theme_yaml(&content)
}

/// Parse a YAML string into a Theme, filling missing fields from default.
fn parse_theme_yaml(yaml: &str) -> Option<Theme> {
    let config: ThemeConfig = serde_yaml::from_str(yaml).ok()?;
    let d = super::builtin::default();

    let color_or = |opt: Option<String>, fallback: Color| -> Color {
        opt.and_then(|s| parse_color(&s)).unwrap_or(fallback)
    };

    Some(Theme {
        name: config.name.unwrap_or(d.name),

        editor_fg: color_or(config.editor_fg, d.editor_fg),
        editor_bg: color_or(config.editor_bg, d.editor_bg),
        editor_cursor: color_or(config.editor_cursor, d.editor_cursor),
        editor_line_number: color_or(config.editor_line_number, d.editor_line_number),
        editor_active_line: color_or(config.editor_active_line, d.editor_active_line),

        editor_keyword: color_or(config.editor_keyword, d.editor_keyword),
        editor_string: color_or(config.editor_string, d.editor_string),
        editor_number: color_or(config.editor_number, d.editor_number),
        editor_comment: color_or(config.editor_comment, d.editor_comment),
        editor_preprocessor: color_or(config.editor_preprocessor, d.editor_preprocessor),

        marker_error: color_or(config.marker_error, d.marker_error),

        token_directive: color_or(config.token_directive, d.token_directive),
        token_literal: color_or(config.token_literal, d.token_literal),
        token_identifier: color_or(config.token_identifier, d.token_identifier),
        token_operator: color_or(config.token_operator, d.token_operator),
        token_other: color_or(config.token_other, d.token_other),

        tree_kind: color_or(config.tree_kind, d.tree_kind),
        tree_field: color_or(config.tree_field, d.tree_field),
        tree_leaf: color_or(config.tree_leaf, d.tree_leaf),

        status_fg: color_or(config.status_fg, d.status_fg),
        status_bg: color_or(config.status_bg, d.status_bg),
        status_accent: color_or(config.status_accent, d.status_accent),
        status_ok: color_or(config.status_ok, d.status_ok),
        status_error: color_or(config.status_error, d.status_error),

        notice_info: color_or(config.notice_info, d.notice_info),
        notice_success: color_or(config.notice_success, d.notice_success),
        notice_error: color_or(config.notice_error, d.notice_error),

        help_key: color_or(config.help_key, d.help_key),
        help_desc: color_or(config.help_desc, d.help_desc),

        border: color_or(config.border, d.border),
        border_focused: color_or(config.border_focused, d.border_focused),
        title: color_or(config.title, d.title),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color("#0000ff"), Some(Color::Rgb(0, 0, 255)));
        assert_eq!(parse_color("#c0caf5"), Some(Color::Rgb(192, 202, 245)));
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("White"), Some(Color::White));
        assert_eq!(parse_color("DarkGray"), Some(Color::DarkGray));
        assert_eq!(parse_color("lightmagenta"), Some(Color::LightMagenta));
    }

    #[test]
    fn parse_invalid_color_returns_none() {
        assert_eq!(parse_color("#xyz"), None);
        assert_eq!(parse_color("rainbow"), None);
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn missing_file_returns_none() {
        // In CI/test, ~/.parseview/theme.yaml likely doesn't exist
        let _ = load_theme_from_yaml();
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = r##"
name: "Partial"
editor_fg: "#ff0000"
border_focused: "green"
"##;
        let theme = parse_theme_yaml(yaml).unwrap();
        assert_eq!(theme.name, "Partial");
        assert_eq!(theme.editor_fg, Color::Rgb(255, 0, 0));
        assert_eq!(theme.border_focused, Color::Green);
        // Unfilled fields should match default
        let d = super::super::builtin::default();
        assert_eq!(theme.editor_cursor, d.editor_cursor);
        assert_eq!(theme.token_literal, d.token_literal);
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r##"
name: "Custom"
editor_fg: "#c0caf5"
editor_bg: "#1a1b26"
editor_cursor: "#e0af68"
editor_line_number: "#565f89"
editor_keyword: "#bb9af7"
editor_string: "#9ece6a"
editor_number: "#ff9e64"
editor_comment: "#565f89"
editor_preprocessor: "#7dcfff"
marker_error: "#f7768e"
token_directive: "#bb9af7"
token_literal: "#9ece6a"
token_identifier: "#7aa2f7"
token_operator: "#e0af68"
token_other: "#c0caf5"
tree_kind: "#7aa2f7"
tree_field: "#e0af68"
tree_leaf: "#9ece6a"
status_fg: white
status_bg: darkgray
status_accent: cyan
status_ok: green
status_error: red
notice_info: cyan
notice_success: green
notice_error: red
help_key: yellow
help_desc: white
border: white
border_focused: cyan
title: cyan
"##;
        let theme = parse_theme_yaml(yaml).unwrap();
        assert_eq!(theme.name, "Custom");
        assert_eq!(theme.editor_fg, Color::Rgb(192, 202, 245));
        assert_eq!(theme.token_identifier, Color::Rgb(122, 162, 247));
        assert_eq!(theme.status_ok, Color::Green);
    }

    #[test]
    fn invalid_yaml_returns_none() {
        assert!(parse_theme_yaml("{{invalid").is_none());
    }

    #[test]
    fn invalid_hex_in_yaml_uses_default() {
        let yaml = r##"
name: "BadHex"
editor_fg: "#xyz123"
"##;
        let theme = parse_theme_yaml(yaml).unwrap();
        let d = super::super::builtin::default();
        assert_eq!(theme.editor_fg, d.editor_fg);
    }
}
