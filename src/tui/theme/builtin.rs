//! Built-in themes — color schemes shipped with parseview.

use ratatui::style::Color;

use super::Theme;

/// Default theme — plain terminal colors.
pub fn default() -> Theme {
    Theme {
        name: "Default".to_string(),

        editor_fg: Color::White,
        editor_bg: Color::Reset,
        editor_cursor: Color::Yellow,
        editor_line_number: Color::DarkGray,
        editor_active_line: Color::DarkGray,

        editor_keyword: Color::Yellow,
        editor_string: Color::Green,
        editor_number: Color::Cyan,
        editor_comment: Color::DarkGray,
        editor_preprocessor: Color::Magenta,

        marker_error: Color::Red,

        token_directive: Color::Magenta,
        token_literal: Color::Green,
        token_identifier: Color::Cyan,
        token_operator: Color::Yellow,
        token_other: Color::White,

        tree_kind: Color::Cyan,
        tree_field: Color::Yellow,
        tree_leaf: Color::Green,

        status_fg: Color::White,
        status_bg: Color::DarkGray,
        status_accent: Color::Cyan,
        status_ok: Color::Green,
        status_error: Color::Red,

        notice_info: Color::Cyan,
        notice_success: Color::Green,
        notice_error: Color::Red,

        help_key: Color::Yellow,
        help_desc: Color::White,

        border: Color::White,
        border_focused: Color::Cyan,
        title: Color::Cyan,
    }
}

/// Catppuccin Mocha — pastel colors on a dark background.
pub fn catppuccin_mocha() -> Theme {
    Theme {
        name: "Catppuccin Mocha".to_string(),

        editor_fg: Color::Rgb(205, 214, 244),        // text
        editor_bg: Color::Rgb(30, 30, 46),           // base
        editor_cursor: Color::Rgb(249, 226, 175),    // yellow
        editor_line_number: Color::Rgb(88, 91, 112), // surface2
        editor_active_line: Color::Rgb(49, 50, 68),  // surface0

        editor_keyword: Color::Rgb(203, 166, 247), // mauve
        editor_string: Color::Rgb(166, 227, 161),  // green
        editor_number: Color::Rgb(250, 179, 135),  // peach
        editor_comment: Color::Rgb(108, 112, 134), // overlay0
        editor_preprocessor: Color::Rgb(243, 139, 168), // red

        marker_error: Color::Rgb(243, 139, 168), // red

        token_directive: Color::Rgb(203, 166, 247),  // mauve
        token_literal: Color::Rgb(166, 227, 161),    // green
        token_identifier: Color::Rgb(116, 199, 236), // sapphire
        token_operator: Color::Rgb(249, 226, 175),   // yellow
        token_other: Color::Rgb(205, 214, 244),      // text

        tree_kind: Color::Rgb(137, 180, 250),  // blue
        tree_field: Color::Rgb(249, 226, 175), // yellow
        tree_leaf: Color::Rgb(166, 227, 161),  // green

        status_fg: Color::Rgb(205, 214, 244),     // text
        status_bg: Color::Rgb(49, 50, 68),        // surface0
        status_accent: Color::Rgb(137, 180, 250), // blue
        status_ok: Color::Rgb(166, 227, 161),     // green
        status_error: Color::Rgb(243, 139, 168),  // red

        notice_info: Color::Rgb(137, 180, 250),
        notice_success: Color::Rgb(166, 227, 161),
        notice_error: Color::Rgb(243, 139, 168),

        help_key: Color::Rgb(249, 226, 175),
        help_desc: Color::Rgb(205, 214, 244),

        border: Color::Rgb(108, 112, 134),         // overlay0
        border_focused: Color::Rgb(137, 180, 250), // blue
        title: Color::Rgb(137, 180, 250),
    }
}

/// Gruvbox Dark — warm retro palette.
pub fn gruvbox_dark() -> Theme {
    Theme {
        name: "Gruvbox Dark".to_string(),

        editor_fg: Color::Rgb(235, 219, 178),          // fg
        editor_bg: Color::Rgb(40, 40, 40),             // bg
        editor_cursor: Color::Rgb(250, 189, 47),       // yellow
        editor_line_number: Color::Rgb(124, 111, 100), // gray
        editor_active_line: Color::Rgb(60, 56, 54),    // bg1

        editor_keyword: Color::Rgb(254, 128, 25),  // orange
        editor_string: Color::Rgb(184, 187, 38),   // green
        editor_number: Color::Rgb(211, 134, 155),  // purple
        editor_comment: Color::Rgb(124, 111, 100), // gray
        editor_preprocessor: Color::Rgb(131, 165, 152), // aqua

        marker_error: Color::Rgb(251, 73, 52), // red

        token_directive: Color::Rgb(131, 165, 152),  // aqua
        token_literal: Color::Rgb(184, 187, 38),     // green
        token_identifier: Color::Rgb(69, 133, 136),  // blue
        token_operator: Color::Rgb(250, 189, 47),    // yellow
        token_other: Color::Rgb(235, 219, 178),      // fg

        tree_kind: Color::Rgb(131, 165, 152),  // aqua
        tree_field: Color::Rgb(250, 189, 47),  // yellow
        tree_leaf: Color::Rgb(184, 187, 38),   // green

        status_fg: Color::Rgb(235, 219, 178),
        status_bg: Color::Rgb(60, 56, 54),        // bg1
        status_accent: Color::Rgb(131, 165, 152), // aqua
        status_ok: Color::Rgb(184, 187, 38),      // green
        status_error: Color::Rgb(251, 73, 52),    // red

        notice_info: Color::Rgb(131, 165, 152),
        notice_success: Color::Rgb(184, 187, 38),
        notice_error: Color::Rgb(251, 73, 52),

        help_key: Color::Rgb(250, 189, 47),
        help_desc: Color::Rgb(235, 219, 178),

        border: Color::Rgb(168, 153, 132),         // fg4
        border_focused: Color::Rgb(131, 165, 152), // aqua
        title: Color::Rgb(131, 165, 152),
    }
}

/// Minimal — monochrome white/gray for maximum readability.
pub fn minimal() -> Theme {
    Theme {
        name: "Minimal".to_string(),

        editor_fg: Color::White,
        editor_bg: Color::Reset,
        editor_cursor: Color::White,
        editor_line_number: Color::DarkGray,
        editor_active_line: Color::DarkGray,

        editor_keyword: Color::White,
        editor_string: Color::Gray,
        editor_number: Color::LightGreen,
        editor_comment: Color::DarkGray,
        editor_preprocessor: Color::Gray,

        marker_error: Color::LightRed,

        token_directive: Color::Gray,
        token_literal: Color::LightGreen,
        token_identifier: Color::White,
        token_operator: Color::LightYellow,
        token_other: Color::Gray,

        tree_kind: Color::White,
        tree_field: Color::Gray,
        tree_leaf: Color::LightGreen,

        status_fg: Color::White,
        status_bg: Color::DarkGray,
        status_accent: Color::White,
        status_ok: Color::LightGreen,
        status_error: Color::LightRed,

        notice_info: Color::White,
        notice_success: Color::LightGreen,
        notice_error: Color::LightRed,

        help_key: Color::White,
        help_desc: Color::Gray,

        border: Color::DarkGray,
        border_focused: Color::White,
        title: Color::White,
    }
}

/// Returns all built-in themes in display order.
pub fn all_builtins() -> Vec<Theme> {
    vec![default(), catppuccin_mocha(), gruvbox_dark(), minimal()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_count() {
        assert_eq!(all_builtins().len(), 4);
    }

    #[test]
    fn all_builtins_distinct_names() {
        let themes = all_builtins();
        let mut names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), themes.len());
    }

    #[test]
    fn each_builtin_valid() {
        for theme in all_builtins() {
            assert!(!theme.name.is_empty());
        }
    }

    #[test]
    fn token_categories_distinct_in_default() {
        let t = default();
        assert_ne!(t.token_directive, t.token_literal);
        assert_ne!(t.token_identifier, t.token_operator);
    }
}
