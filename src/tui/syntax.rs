//! Lightweight per-line C++ syntax highlighter for the editor.

use ratatui::style::Style;
use ratatui::text::Span;

use super::theme::Theme;

/// Keywords of the teaching subset plus the usual C++ staples.
const KEYWORDS: &[&str] = &[
    "int",
    "char",
    "float",
    "double",
    "bool",
    "void",
    "long",
    "short",
    "unsigned",
    "signed",
    "return",
    "using",
    "namespace",
    "if",
    "else",
    "while",
    "for",
    "do",
    "break",
    "continue",
    "const",
    "true",
    "false",
];

/// Highlight a single line of C++ source into styled spans.
pub fn highlight_line<'a>(line: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    if line.is_empty() {
        return vec![Span::raw("")];
    }

    // Preprocessor directives own the whole line.
    if line.trim_start().starts_with('#') {
        return vec![Span::styled(
            line,
            Style::default().fg(theme.editor_preprocessor),
        )];
    }

    let mut spans: Vec<Span<'a>> = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        // Comment: // to end of line
        if ch == '/' {
            let rest = &line[start..];
            if rest.starts_with("//") {
                spans.push(Span::styled(
                    rest,
                    Style::default().fg(theme.editor_comment),
                ));
                return spans;
            }
        }

        // String literals: "..."
        if ch == '"' {
            let rest = &line[start + 1..];
            let end = rest
                .find('"')
                .map(|i| start + 1 + i + 1)
                .unwrap_or(line.len());
            spans.push(Span::styled(
                &line[start..end],
                Style::default().fg(theme.editor_string),
            ));
            while chars.peek().is_some_and(|&(i, _)| i < end) {
                chars.next();
            }
            continue;
        }

        // Char literals: '...'
        if ch == '\'' {
            let rest = &line[start + 1..];
            let end = rest
                .find('\'')
                .map(|i| start + 1 + i + 1)
                .unwrap_or(line.len());
            spans.push(Span::styled(
                &line[start..end],
                Style::default().fg(theme.editor_string),
            ));
            while chars.peek().is_some_and(|&(i, _)| i < end) {
                chars.next();
            }
            continue;
        }

        // Numbers
        if ch.is_ascii_digit() {
            let mut end = start;
            let mut saw_dot = false;
            for (i, c) in chars.clone() {
                if c.is_ascii_digit() {
                    end = i + c.len_utf8();
                } else if c == '.' && !saw_dot {
                    saw_dot = true;
                    end = i + 1;
                } else {
                    break;
                }
            }
            // Only highlight if it's not part of an identifier
            let before = if start > 0 {
                line.as_bytes().get(start - 1).map(|&b| b as char)
            } else {
                None
            };
            if !before.is_some_and(|c| c.is_alphanumeric() || c == '_') {
                spans.push(Span::styled(
                    &line[start..end],
                    Style::default().fg(theme.editor_number),
                ));
                while chars.peek().is_some_and(|&(i, _)| i < end) {
                    chars.next();
                }
                continue;
            }
        }

        // Words (identifiers/keywords)
        if ch.is_alphabetic() || ch == '_' {
            let mut end = start;
            for (i, c) in chars.clone() {
                if c.is_alphanumeric() || c == '_' {
                    end = i + c.len_utf8();
                } else {
                    break;
                }
            }
            let word = &line[start..end];
            if KEYWORDS.contains(&word) {
                spans.push(Span::styled(
                    word,
                    Style::default().fg(theme.editor_keyword),
                ));
            } else {
                spans.push(Span::styled(word, Style::default().fg(theme.editor_fg)));
            }
            while chars.peek().is_some_and(|&(i, _)| i < end) {
                chars.next();
            }
            continue;
        }

        // Everything else: punctuation, whitespace, operators
        let byte_len = ch.len_utf8();
        spans.push(Span::styled(
            &line[start..start + byte_len],
            Style::default().fg(theme.editor_fg),
        ));
        chars.next();
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::builtin;
    use ratatui::style::Color;

    fn get_colors(spans: &[Span]) -> Vec<Color> {
        spans
            .iter()
            .filter(|s| !s.content.trim().is_empty())
            .map(|s| s.style.fg.unwrap_or(Color::Reset))
            .collect()
    }

    #[test]
    fn keywords_highlighted() {
        let theme = builtin::default();
        let spans = highlight_line("int main() {", &theme);
        assert!(!spans.is_empty());
        assert_eq!(spans[0].style.fg.unwrap(), theme.editor_keyword);
    }

    #[test]
    fn preprocessor_owns_whole_line() {
        let theme = builtin::default();
        let spans = highlight_line("#include <iostream>", &theme);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.fg.unwrap(), theme.editor_preprocessor);
    }

    #[test]
    fn string_literal_highlighted() {
        let theme = builtin::default();
        let spans = highlight_line("cout << \"hello\";", &theme);
        let colors = get_colors(&spans);
        assert!(colors.contains(&theme.editor_string));
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let theme = builtin::default();
        let spans = highlight_line("cout << \"hello", &theme);
        let last = spans.last().unwrap();
        assert_eq!(last.style.fg.unwrap(), theme.editor_string);
        assert!(last.content.ends_with("hello"));
    }

    #[test]
    fn char_literal_highlighted() {
        let theme = builtin::default();
        let spans = highlight_line("char c = 'x';", &theme);
        let colors = get_colors(&spans);
        assert!(colors.contains(&theme.editor_string));
    }

    #[test]
    fn numbers_highlighted() {
        let theme = builtin::default();
        let spans = highlight_line("return 42;", &theme);
        let colors = get_colors(&spans);
        assert!(colors.contains(&theme.editor_keyword)); // "return"
        assert!(colors.contains(&theme.editor_number)); // "42"
    }

    #[test]
    fn digits_inside_identifier_not_number() {
        let theme = builtin::default();
        let spans = highlight_line("var2", &theme);
        let colors = get_colors(&spans);
        assert!(!colors.contains(&theme.editor_number));
    }

    #[test]
    fn plain_identifier_uses_editor_fg() {
        let theme = builtin::default();
        let spans = highlight_line("myvar", &theme);
        assert_eq!(spans[0].style.fg.unwrap(), theme.editor_fg);
    }

    #[test]
    fn empty_line() {
        let theme = builtin::default();
        let spans = highlight_line("", &theme);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "");
    }

    #[test]
    fn comment_highlighted() {
        let theme = builtin::default();
        let spans = highlight_line("// this is a comment", &theme);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.fg.unwrap(), theme.editor_comment);
    }

    #[test]
    fn trailing_comment_highlighted() {
        let theme = builtin::default();
        let spans = highlight_line("return 0; // done", &theme);
        let last = spans.last().unwrap();
        assert_eq!(last.style.fg.unwrap(), theme.editor_comment);
    }

    #[test]
    fn mocha_theme_syntax_colors() {
        let theme = builtin::catppuccin_mocha();
        let spans = highlight_line("int x = 128;", &theme);
        let colors = get_colors(&spans);
        assert!(colors.contains(&theme.editor_keyword));
        assert!(colors.contains(&theme.editor_number));
    }
}
