//! Help screen — modal overlay showing keybinding reference.

/// A line in the help screen.
#[derive(Debug, Clone)]
pub struct HelpLine {
    pub text: String,
    pub is_header: bool,
}

/// Help screen state.
#[derive(Debug, Clone)]
pub struct HelpScreen {
    pub visible: bool,
    pub scroll_offset: usize,
    content: Vec<HelpLine>,
}

impl HelpScreen {
    /// Create a new help screen with the full keybinding reference.
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll_offset: 0,
            content: Self::build_content(),
        }
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.scroll_offset = 0;
        }
    }

    /// Show the help screen.
    pub fn show(&mut self) {
        self.visible = true;
        self.scroll_offset = 0;
    }

    /// Hide the help screen.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Scroll up.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down.
    pub fn scroll_down(&mut self, max_visible: usize) {
        let max_scroll = self.content.len().saturating_sub(max_visible);
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Get all help lines.
    pub fn lines(&self) -> &[HelpLine] {
        &self.content
    }

    fn build_content() -> Vec<HelpLine> {
        let mut lines = Vec::new();

        let h = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: true,
        };
        let l = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: false,
        };

        lines.push(h("GLOBAL (all tabs)"));
        lines.push(l("  Ctrl-Q       Quit"));
        lines.push(l("  Ctrl-R / F5  Compile current document"));
        lines.push(l("  Tab          Next view (Editor / Tokens / Tree)"));
        lines.push(l("  Shift-Tab    Previous view"));
        lines.push(l("  F1           Toggle this help screen"));
        lines.push(l("  Ctrl-T       Cycle theme"));
        lines.push(l("  Esc          Close overlay"));
        lines.push(l(""));

        lines.push(h("EDITOR TAB"));
        lines.push(l("  Any key      Insert character"));
        lines.push(l("  Backspace    Delete before cursor"));
        lines.push(l("  Delete       Delete at cursor"));
        lines.push(l("  Enter        New line"));
        lines.push(l("  Arrows       Move cursor"));
        lines.push(l("  Home/End     Start/end of line"));
        lines.push(l(""));

        lines.push(h("TOKENS / TREE TABS"));
        lines.push(l("  Up/Down, j/k Scroll one row"));
        lines.push(l("  PgUp/PgDn    Scroll one page"));
        lines.push(l(""));

        lines.push(h("TIPS"));
        lines.push(l("  - The token stream is shown even when parsing fails"));
        lines.push(l("  - Syntax errors are underlined on the reported line"));
        lines.push(l("  - A custom theme can live in ~/.parseview/theme.yaml"));

        lines
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hidden() {
        let help = HelpScreen::new();
        assert!(!help.visible);
        assert_eq!(help.scroll_offset, 0);
    }

    #[test]
    fn toggle_shows_and_hides() {
        let mut help = HelpScreen::new();
        help.toggle();
        assert!(help.visible);
        help.toggle();
        assert!(!help.visible);
    }

    #[test]
    fn toggle_resets_scroll() {
        let mut help = HelpScreen::new();
        help.show();
        help.scroll_down(5);
        assert!(help.scroll_offset > 0);
        help.hide();
        help.toggle(); // show again
        assert_eq!(help.scroll_offset, 0);
    }

    #[test]
    fn content_not_empty() {
        let help = HelpScreen::new();
        assert!(!help.lines().is_empty());
    }

    #[test]
    fn has_section_headers() {
        let help = HelpScreen::new();
        let headers: Vec<_> = help.lines().iter().filter(|l| l.is_header).collect();
        assert!(headers.len() >= 4); // Global, Editor, Tokens/Tree, Tips
    }

    #[test]
    fn scroll_bounds() {
        let mut help = HelpScreen::new();
        help.scroll_up(); // should not underflow
        assert_eq!(help.scroll_offset, 0);

        for _ in 0..200 {
            help.scroll_down(10);
        }
        assert!(help.scroll_offset <= help.lines().len());
    }
}
