//! Source editor — text buffer with cursor, viewport, and line markers.

use std::collections::BTreeMap;

/// Marker severity, mirroring the widget contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A visual annotation attached to a line range. Positions are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub message: String,
    pub severity: Severity,
}

/// A minimal text editor for the source pane.
#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    scroll_offset: usize,
    viewport_height: usize,
    markers: BTreeMap<String, Vec<Marker>>,
}

impl Editor {
    /// Create an editor with initial content.
    pub fn new(content: &str) -> Self {
        let lines: Vec<String> = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|l| l.to_string()).collect()
        };
        Self {
            lines,
            cursor_row: 0,
            cursor_col: 0,
            scroll_offset: 0,
            viewport_height: 20,
            markers: BTreeMap::new(),
        }
    }

    /// Get the full text content.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Get all lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get cursor position (row, col), 0-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Get the current scroll offset (first visible line).
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set the viewport height (number of visible lines).
    pub fn set_viewport_height(&mut self, h: usize) {
        self.viewport_height = h.max(1);
        self.ensure_cursor_visible();
    }

    /// Ensure the cursor is within the visible viewport, adjusting scroll_offset.
    fn ensure_cursor_visible(&mut self) {
        if self.viewport_height == 0 {
            return;
        }
        if self.cursor_row < self.scroll_offset {
            self.scroll_offset = self.cursor_row;
        } else if self.cursor_row >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.cursor_row - self.viewport_height + 1;
        }
    }

    // --- Marker interface ---

    /// Replace the marker set for an owner. The owner id is stable across
    /// calls, so re-setting replaces rather than appends; an empty list
    /// removes that owner's markers.
    pub fn set_markers(&mut self, owner: &str, markers: Vec<Marker>) {
        if markers.is_empty() {
            self.markers.remove(owner);
        } else {
            self.markers.insert(owner.to_string(), markers);
        }
    }

    /// All markers from all owners.
    pub fn markers(&self) -> Vec<&Marker> {
        self.markers.values().flatten().collect()
    }

    /// The first marker covering a 1-based line, if any.
    pub fn marker_on_line(&self, line: usize) -> Option<&Marker> {
        self.markers
            .values()
            .flatten()
            .find(|m| m.start_line <= line && line <= m.end_line)
    }

    /// Length in characters of a 1-based line; `None` past the end.
    pub fn line_length(&self, line: usize) -> Option<usize> {
        self.lines
            .get(line.checked_sub(1)?)
            .map(|l| l.chars().count())
    }

    /// Center the viewport on a 1-based line, clamped to the document.
    pub fn reveal_line(&mut self, line: usize) {
        let row = line.saturating_sub(1).min(self.lines.len().saturating_sub(1));
        let half = self.viewport_height / 2;
        let max_offset = self.lines.len().saturating_sub(self.viewport_height);
        self.scroll_offset = row.saturating_sub(half).min(max_offset);
    }

    // --- Editing ---

    // The cursor column counts characters, not bytes. Edits convert it to
    // a byte offset right at the mutation point so multibyte input (ç, ã)
    // never lands on a non-boundary.

    fn byte_col(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map_or(line.len(), |(offset, _)| offset)
    }

    fn char_len(line: &str) -> usize {
        line.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if self.cursor_row < self.lines.len() {
            let line = &mut self.lines[self.cursor_row];
            let col = self.cursor_col.min(Self::char_len(line));
            let at = Self::byte_col(line, col);
            line.insert(at, c);
            self.cursor_col = col + 1;
        }
    }

    /// Insert a new line at the cursor.
    pub fn newline(&mut self) {
        if self.cursor_row < self.lines.len() {
            let at = Self::byte_col(&self.lines[self.cursor_row], self.cursor_col);
            let rest = self.lines[self.cursor_row][at..].to_string();
            self.lines[self.cursor_row].truncate(at);
            self.cursor_row += 1;
            self.lines.insert(self.cursor_row, rest);
            self.cursor_col = 0;
            self.ensure_cursor_visible();
        }
    }

    /// Delete character before cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let col = self.cursor_col.min(Self::char_len(line));
            let at = Self::byte_col(line, col - 1);
            line.remove(at);
            self.cursor_col = col - 1;
        } else if self.cursor_row > 0 {
            let current_line = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = Self::char_len(&self.lines[self.cursor_row]);
            self.lines[self.cursor_row].push_str(&current_line);
            self.ensure_cursor_visible();
        }
    }

    /// Delete character at cursor.
    pub fn delete(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        if self.cursor_col < Self::char_len(line) {
            let at = Self::byte_col(line, self.cursor_col);
            line.remove(at);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next_line = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next_line);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = Self::char_len(&self.lines[self.cursor_row]);
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor_col < Self::char_len(&self.lines[self.cursor_row]) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    /// Move cursor up.
    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self
                .cursor_col
                .min(Self::char_len(&self.lines[self.cursor_row]));
            self.ensure_cursor_visible();
        }
    }

    /// Move cursor down.
    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self
                .cursor_col
                .min(Self::char_len(&self.lines[self.cursor_row]));
            self.ensure_cursor_visible();
        }
    }

    /// Move cursor to start of line.
    pub fn home(&mut self) {
        self.cursor_col = 0;
    }

    /// Move cursor to end of line.
    pub fn end(&mut self) {
        self.cursor_col = Self::char_len(&self.lines[self.cursor_row]);
    }

    /// Replace all content. Markers are kept; stale ones are handled by
    /// the annotator and ignored by rendering when out of range.
    pub fn set_content(&mut self, content: &str) {
        self.lines = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|l| l.to_string()).collect()
        };
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scroll_offset = 0;
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
