//! Token stream panel — scroll state and row formatting.

use crate::remote::Token;

/// Token panel state — a scrollable list over the last compile's tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenPanel {
    scroll: usize,
}

impl TokenPanel {
    /// Current scroll offset in rows.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Reset scroll to the top. Called when new results land.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Scroll up one row.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down one row, clamped to the list.
    pub fn scroll_down(&mut self, row_count: usize, viewport: usize) {
        let max = row_count.saturating_sub(viewport);
        self.scroll = (self.scroll + 1).min(max);
    }

    /// Scroll up a full page.
    pub fn page_up(&mut self, viewport: usize) {
        self.scroll = self.scroll.saturating_sub(viewport.max(1));
    }

    /// Scroll down a full page, clamped to the list.
    pub fn page_down(&mut self, row_count: usize, viewport: usize) {
        let max = row_count.saturating_sub(viewport);
        self.scroll = (self.scroll + viewport.max(1)).min(max);
    }

    /// Summary line for the panel footer.
    pub fn summary(row_count: usize) -> String {
        format!("{row_count} tokens")
    }
}

/// Format one token row: "line:col  kind  value".
pub fn format_row(token: &Token) -> String {
    let value = token.display_value();
    if value.is_empty() {
        format!("{:>4}:{:<3} {}", token.line, token.column, token.name)
    } else {
        format!(
            "{:>4}:{:<3} {}  {}",
            token.line, token.column, token.name, value
        )
    }
}
