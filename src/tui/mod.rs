//! TUI interface — ratatui views: editor, token stream, syntax tree.
//!
//! The App struct holds all TUI state and drives the event loop.

pub mod annotate;
pub mod classify;
pub mod editor;
pub mod help;
pub mod keybindings;
pub mod layout;
pub mod notifications;
pub mod status;
pub mod syntax;
pub mod theme;
pub mod tokens;
pub mod tree_view;

pub use annotate::annotate;
pub use classify::{classify, TokenCategory};
pub use editor::{Editor, Marker, Severity};
pub use help::HelpScreen;
pub use keybindings::{map_key, Action};
pub use layout::ViewTab;
pub use notifications::{Level, Notice, Notifier};
pub use status::{CompileStatus, StatusInfo};
pub use tokens::TokenPanel;
pub use tree_view::{flatten, TreePanel};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::remote::{
    response_channel, CompileEvent, CompileService, Orchestrator, ResponseReceiver, ResponseSender,
};

/// The main TUI application state.
pub struct App {
    pub editor: Editor,
    pub tab: ViewTab,
    pub orchestrator: Orchestrator,
    pub notifier: Notifier,
    pub status: StatusInfo,
    pub token_panel: TokenPanel,
    pub tree_panel: TreePanel,
    pub help_screen: HelpScreen,
    pub should_quit: bool,
    pub theme: theme::Theme,
    available_themes: Vec<theme::Theme>,
    response_tx: ResponseSender,
    response_rx: ResponseReceiver,
    // Inner height of the content area from the last draw, for paging.
    panel_viewport: usize,
}

impl App {
    /// Create a new App with initial source, a compile service, and the
    /// endpoint label shown in the status bar.
    pub fn new(
        source: &str,
        service: Arc<dyn CompileService + Send + Sync>,
        endpoint: impl Into<String>,
    ) -> Self {
        let (response_tx, response_rx) = response_channel();
        let loaded_theme = theme::load_theme();
        let available_themes = theme::builtin::all_builtins();

        Self {
            editor: Editor::new(source),
            tab: ViewTab::Editor,
            orchestrator: Orchestrator::new(service),
            notifier: Notifier::new(50),
            status: StatusInfo {
                endpoint: endpoint.into(),
                ..Default::default()
            },
            token_panel: TokenPanel::default(),
            tree_panel: TreePanel::default(),
            help_screen: HelpScreen::default(),
            should_quit: false,
            theme: loaded_theme,
            available_themes,
            response_tx,
            response_rx,
            panel_viewport: 20,
        }
    }

    /// Process an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Compile => self.start_compile(),
            Action::NextTab => self.tab = self.tab.next(),
            Action::PrevTab => self.tab = self.tab.prev(),
            Action::EditorInsert(c) => self.editor.insert_char(c),
            Action::EditorBackspace => self.editor.backspace(),
            Action::EditorDelete => self.editor.delete(),
            Action::EditorLeft => self.editor.move_left(),
            Action::EditorRight => self.editor.move_right(),
            Action::EditorUp => self.editor.move_up(),
            Action::EditorDown => self.editor.move_down(),
            Action::EditorNewline => self.editor.newline(),
            Action::EditorHome => self.editor.home(),
            Action::EditorEnd => self.editor.end(),
            Action::ScrollUp => {
                if self.help_screen.visible {
                    self.help_screen.scroll_up();
                } else {
                    match self.tab {
                        ViewTab::Tokens => self.token_panel.scroll_up(),
                        ViewTab::Tree => self.tree_panel.scroll_up(),
                        ViewTab::Editor => {}
                    }
                }
            }
            Action::ScrollDown => {
                let viewport = self.panel_viewport;
                if self.help_screen.visible {
                    self.help_screen.scroll_down(viewport);
                } else {
                    match self.tab {
                        ViewTab::Tokens => {
                            let rows = self.orchestrator.session().tokens.len();
                            self.token_panel.scroll_down(rows, viewport);
                        }
                        ViewTab::Tree => {
                            let rows = self.tree_row_count();
                            self.tree_panel.scroll_down(rows, viewport);
                        }
                        ViewTab::Editor => {}
                    }
                }
            }
            Action::PageUp => match self.tab {
                ViewTab::Tokens => self.token_panel.page_up(self.panel_viewport),
                ViewTab::Tree => self.tree_panel.page_up(self.panel_viewport),
                ViewTab::Editor => {}
            },
            Action::PageDown => {
                let viewport = self.panel_viewport;
                match self.tab {
                    ViewTab::Tokens => {
                        let rows = self.orchestrator.session().tokens.len();
                        self.token_panel.page_down(rows, viewport);
                    }
                    ViewTab::Tree => {
                        let rows = self.tree_row_count();
                        self.tree_panel.page_down(rows, viewport);
                    }
                    ViewTab::Editor => {}
                }
            }
            Action::ToggleHelp => self.help_screen.toggle(),
            Action::Escape => {
                if self.help_screen.visible {
                    self.help_screen.hide();
                } else if self.tab != ViewTab::Editor {
                    self.tab = ViewTab::Editor;
                }
            }
            Action::CycleTheme => {
                self.theme = theme::cycle_theme(&self.theme, &self.available_themes);
                self.notifier.info(format!("theme: {}", self.theme.name));
            }
        }
        let (row, col) = self.editor.cursor();
        self.status.cursor_line = row + 1;
        self.status.cursor_column = col + 1;
    }

    /// Send the current document off for compilation.
    ///
    /// Ignored with a console notice while a request is in flight. On
    /// admission the previous error marker is cleared so the editor does
    /// not show stale results against the compiling document.
    fn start_compile(&mut self) {
        let document = self.editor.content();
        if !self
            .orchestrator
            .request_compile(document, self.response_tx.clone())
        {
            self.notifier.info("compile already in flight");
            return;
        }
        annotate(&mut self.editor, None);
        self.status.compile_status = CompileStatus::Compiling;
        self.notifier.loading("Compiling...");
    }

    /// Drain finished compile results and update every view.
    pub fn process_responses(&mut self) {
        while let Some(result) = self.response_rx.poll() {
            let event = self.orchestrator.finish(result);
            self.notifier.dismiss_loading();
            self.token_panel.reset();
            self.tree_panel.reset();
            match event {
                CompileEvent::Succeeded => {
                    annotate(&mut self.editor, None);
                    self.status.compile_status = CompileStatus::Ok;
                    let count = self.orchestrator.session().tokens.len();
                    self.notifier
                        .success(format!("Compiled: {count} tokens, tree ready"));
                }
                CompileEvent::FailedSyntax { message, line } => {
                    annotate(&mut self.editor, line);
                    self.status.compile_status = CompileStatus::Error(message.clone());
                    self.notifier.error(message);
                }
                CompileEvent::FailedTransport { detail } => {
                    self.status.compile_status = CompileStatus::Error(detail.clone());
                    self.notifier.error(format!("service unreachable: {detail}"));
                }
            }
        }
    }

    fn tree_row_count(&self) -> usize {
        self.orchestrator
            .session()
            .tree
            .as_ref()
            .map(|t| flatten(t).len())
            .unwrap_or(0)
    }

    /// Context-sensitive hint for the status bar.
    pub fn context_hint(&self) -> &str {
        if self.help_screen.visible {
            return "F1/Esc:close help";
        }
        match self.tab {
            ViewTab::Editor => "Ctrl-R:compile  Tab:views  F1:help",
            ViewTab::Tokens | ViewTab::Tree => "Up/Down:scroll  Esc:editor  Ctrl-R:compile",
        }
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(5),    // Active view
                Constraint::Length(6), // Notification console
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        self.draw_tabs(frame, chunks[0]);
        self.panel_viewport = chunks[1].height.saturating_sub(2) as usize;
        match self.tab {
            ViewTab::Editor => self.draw_editor(frame, chunks[1]),
            ViewTab::Tokens => self.draw_tokens(frame, chunks[1]),
            ViewTab::Tree => self.draw_tree(frame, chunks[1]),
        }
        self.draw_console(frame, chunks[2]);
        self.draw_status(frame, chunks[3]);

        if self.help_screen.visible {
            self.draw_help(frame, size);
        }
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut spans = Vec::new();
        for tab in ViewTab::all() {
            let style = if tab == self.tab {
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.editor_line_number)
            };
            spans.push(Span::styled(format!(" {} ", tab.title()), style));
            spans.push(Span::raw("|"));
        }
        spans.pop();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_editor(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme.clone();
        let inner_height = area.height.saturating_sub(2) as usize;
        self.editor.set_viewport_height(inner_height);
        let scroll_offset = self.editor.scroll_offset();

        let lines: Vec<Line> = self
            .editor
            .lines()
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(i, line)| {
                let marked = self.editor.marker_on_line(i + 1).is_some();
                let active = i == self.editor.cursor().0;
                let gutter = if marked {
                    Span::styled(
                        format!("{:>3}>", i + 1),
                        Style::default()
                            .fg(theme.marker_error)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    let color = if active {
                        theme.editor_cursor
                    } else {
                        theme.editor_line_number
                    };
                    Span::styled(format!("{:>3} ", i + 1), Style::default().fg(color))
                };
                let mut spans = vec![gutter];
                if marked {
                    spans.push(Span::styled(
                        line.as_str(),
                        Style::default()
                            .fg(theme.marker_error)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                } else {
                    spans.extend(syntax::highlight_line(line, &theme));
                }
                let row = Line::from(spans);
                if active && !marked {
                    row.style(Style::default().bg(theme.editor_active_line))
                } else {
                    row
                }
            })
            .collect();

        let block = Block::default()
            .title(" Editor ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused));
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.editor_bg))
            .block(block);
        frame.render_widget(paragraph, area);

        let (row, col) = self.editor.cursor();
        // +1 for border, +4 for line number gutter
        let x = area.x + 1 + 4 + col as u16;
        let y = area.y + 1 + (row.saturating_sub(scroll_offset)) as u16;
        if x < area.x + area.width && y < area.y + area.height {
            frame.set_cursor_position((x, y));
        }
    }

    fn draw_tokens(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let session = self.orchestrator.session();
        let summary = TokenPanel::summary(session.tokens.len());
        let block = Block::default()
            .title(format!(" Tokens — {summary} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        if session.tokens.is_empty() {
            let paragraph =
                Paragraph::new("(no tokens — compile with Ctrl-R)").block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = session
            .tokens
            .iter()
            .skip(self.token_panel.scroll())
            .take(inner_height)
            .map(|token| {
                let color = match classify(token) {
                    TokenCategory::Directive => theme.token_directive,
                    TokenCategory::Literal => theme.token_literal,
                    TokenCategory::Identifier => theme.token_identifier,
                    TokenCategory::Operator => theme.token_operator,
                    TokenCategory::Other => theme.token_other,
                };
                ListItem::new(Line::from(Span::styled(
                    tokens::format_row(token),
                    Style::default().fg(color),
                )))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn draw_tree(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let session = self.orchestrator.session();
        let block = Block::default()
            .title(" Syntax Tree ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        let Some(tree) = &session.tree else {
            let message = match &session.error_location {
                Some(line) => format!("(no tree — syntax error on line {line})"),
                None => "(no tree — compile with Ctrl-R)".to_string(),
            };
            let paragraph = Paragraph::new(message).block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let inner_height = area.height.saturating_sub(2) as usize;
        let rows = flatten(tree);
        let lines: Vec<Line> = rows
            .iter()
            .skip(self.tree_panel.scroll())
            .take(inner_height)
            .map(|row| {
                let color = match row.kind {
                    tree_view::RowKind::Kind => theme.tree_kind,
                    tree_view::RowKind::Field => theme.tree_field,
                    tree_view::RowKind::Leaf => theme.tree_leaf,
                };
                Line::from(Span::styled(
                    format!("{}{}", "  ".repeat(row.depth), row.text),
                    Style::default().fg(color),
                ))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_console(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut items: Vec<ListItem> = Vec::new();
        if let Some(loading) = self.notifier.loading_message() {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("* {loading}"),
                Style::default()
                    .fg(theme.status_accent)
                    .add_modifier(Modifier::BOLD),
            ))));
        }
        items.extend(self.notifier.entries().iter().rev().map(|notice| {
            let color = match notice.level {
                Level::Info => theme.notice_info,
                Level::Success => theme.notice_success,
                Level::Error => theme.notice_error,
            };
            ListItem::new(Line::from(Span::styled(
                notice.message.as_str(),
                Style::default().fg(color),
            )))
        }));

        let list = List::new(items).block(
            Block::default()
                .title(" Console ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(list, area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let indicator_color = match &self.status.compile_status {
            CompileStatus::Ok => theme.status_ok,
            CompileStatus::Error(_) => theme.status_error,
            CompileStatus::Compiling => theme.status_accent,
            CompileStatus::Idle => theme.editor_line_number,
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.status.status_display()),
                Style::default()
                    .fg(indicator_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " {} | {} ",
                self.status.endpoint,
                self.status.cursor_display(),
            )),
        ];
        if let Some(detail) = self.status.error_detail() {
            spans.push(Span::styled(
                format!(" {detail} "),
                Style::default().fg(theme.status_error),
            ));
        }
        spans.push(Span::styled(
            format!(" {} ", self.context_hint()),
            Style::default().fg(theme.editor_line_number),
        ));

        let paragraph = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.status_bg).fg(theme.status_fg));
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let width = (area.width * 70 / 100).max(50);
        let height = (area.height * 70 / 100).max(15);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let overlay = Rect::new(x, y, width, height);

        let block = Block::default()
            .style(Style::default().bg(Color::Black))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .title(" Help — Press F1 or Esc to close ");
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let lines: Vec<Line> = self
            .help_screen
            .lines()
            .iter()
            .skip(self.help_screen.scroll_offset)
            .take(inner.height as usize)
            .map(|hl| {
                let color = if hl.is_header {
                    self.theme.help_key
                } else {
                    self.theme.help_desc
                };
                Line::from(Span::styled(&hl.text, Style::default().fg(color)))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(5))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) =
                            keybindings::map_key(key, self.tab, self.help_screen.visible)
                        {
                            self.handle_action(action);
                        }
                    }
                }
            }

            self.process_responses();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{CompileOutcome, CompileResult, ServiceError};
    use std::sync::Mutex;

    struct FixedService {
        result: Mutex<Option<CompileResult>>,
    }

    impl FixedService {
        fn ok_empty() -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(Ok(CompileOutcome::default()))),
            })
        }

        fn failing(detail: &str) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(Err(ServiceError::Transport(detail.to_string())))),
            })
        }
    }

    impl CompileService for FixedService {
        fn compile(&self, _code: &str) -> CompileResult {
            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(CompileOutcome::default()))
        }
    }

    fn wait_for_response(app: &mut App) {
        for _ in 0..100 {
            if !app.orchestrator.is_busy() {
                break;
            }
            app.process_responses();
            std::thread::sleep(Duration::from_millis(5));
        }
        app.process_responses();
    }

    #[test]
    fn app_creation() {
        let app = App::new("int main() {}", FixedService::ok_empty(), "http://x/compile");
        assert_eq!(app.tab, ViewTab::Editor);
        assert!(!app.should_quit);
        assert_eq!(app.status.compile_status, CompileStatus::Idle);
        assert_eq!(app.status.endpoint, "http://x/compile");
    }

    #[test]
    fn handle_quit() {
        let mut app = App::new("", FixedService::ok_empty(), "");
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycling() {
        let mut app = App::new("", FixedService::ok_empty(), "");
        app.handle_action(Action::NextTab);
        assert_eq!(app.tab, ViewTab::Tokens);
        app.handle_action(Action::PrevTab);
        assert_eq!(app.tab, ViewTab::Editor);
    }

    #[test]
    fn escape_returns_to_editor_tab() {
        let mut app = App::new("", FixedService::ok_empty(), "");
        app.handle_action(Action::NextTab);
        app.handle_action(Action::Escape);
        assert_eq!(app.tab, ViewTab::Editor);
    }

    #[test]
    fn editing_updates_cursor_status() {
        let mut app = App::new("", FixedService::ok_empty(), "");
        app.handle_action(Action::EditorInsert('a'));
        app.handle_action(Action::EditorInsert('b'));
        assert_eq!(app.status.cursor_display(), "1:3");
        app.handle_action(Action::EditorNewline);
        assert_eq!(app.status.cursor_display(), "2:1");
        assert_eq!(app.editor.content(), "ab\n");
    }

    #[test]
    fn compile_sets_compiling_then_ok() {
        let mut app = App::new("int main() {}", FixedService::ok_empty(), "");
        app.handle_action(Action::Compile);
        assert!(app.notifier.is_loading());
        wait_for_response(&mut app);
        assert_eq!(app.status.compile_status, CompileStatus::Ok);
        assert!(!app.notifier.is_loading());
        assert!(!app.orchestrator.is_busy());
    }

    #[test]
    fn transport_failure_reports_error_status() {
        let mut app = App::new("int main() {}", FixedService::failing("refused"), "");
        app.handle_action(Action::Compile);
        wait_for_response(&mut app);
        assert!(matches!(
            app.status.compile_status,
            CompileStatus::Error(_)
        ));
        assert!(app
            .notifier
            .entries()
            .iter()
            .any(|n| n.level == Level::Error));
        assert!(!app.orchestrator.is_busy());
    }

    #[test]
    fn theme_cycles_and_logs() {
        let mut app = App::new("", FixedService::ok_empty(), "");
        let before = app.theme.name.clone();
        app.handle_action(Action::CycleTheme);
        assert_ne!(app.theme.name, before);
        assert!(!app.notifier.is_empty());
    }

    #[test]
    fn help_toggle() {
        let mut app = App::new("", FixedService::ok_empty(), "");
        app.handle_action(Action::ToggleHelp);
        assert!(app.help_screen.visible);
        app.handle_action(Action::Escape);
        assert!(!app.help_screen.visible);
    }

    #[test]
    fn help_overlay_scrolls_instead_of_panels() {
        let mut app = App::new("", FixedService::ok_empty(), "");
        app.handle_action(Action::NextTab); // Tokens tab behind the overlay
        app.handle_action(Action::ToggleHelp);

        app.handle_action(Action::ScrollDown);
        app.handle_action(Action::ScrollDown);
        assert_eq!(app.help_screen.scroll_offset, 2);
        assert_eq!(app.token_panel.scroll(), 0);

        app.handle_action(Action::ScrollUp);
        assert_eq!(app.help_screen.scroll_offset, 1);

        // Reopening resets the offset
        app.handle_action(Action::ToggleHelp);
        app.handle_action(Action::ToggleHelp);
        assert_eq!(app.help_screen.scroll_offset, 0);
    }
}
