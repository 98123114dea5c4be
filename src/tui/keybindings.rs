//! Key bindings — maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::layout::ViewTab;

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Send the current document to the compiler service.
    Compile,
    /// Switch to the next result view tab.
    NextTab,
    /// Switch to the previous result view tab.
    PrevTab,
    /// Insert a character in the editor.
    EditorInsert(char),
    /// Delete character before cursor.
    EditorBackspace,
    /// Delete character at cursor.
    EditorDelete,
    /// Move cursor in editor.
    EditorLeft,
    EditorRight,
    EditorUp,
    EditorDown,
    /// New line in editor.
    EditorNewline,
    /// Navigate to start/end of line.
    EditorHome,
    EditorEnd,
    /// Scroll the focused result panel.
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape key (close overlays).
    Escape,
    /// Cycle to the next theme.
    CycleTheme,
}

/// Map a key event to an application action based on the active tab.
/// Editor actions only fire on the Editor tab; the result tabs get
/// scroll navigation instead.
pub fn map_key(key: KeyEvent, tab: ViewTab, help_visible: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Help overlay intercepts keys when visible
    if help_visible {
        if ctrl && key.code == KeyCode::Char('q') {
            return Some(Action::Quit);
        }
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => Some(Action::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
            _ => None,
        };
    }

    // Global bindings (all tabs)
    if ctrl {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Compile),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(5) => return Some(Action::Compile),
        KeyCode::F(1) => return Some(Action::ToggleHelp),
        KeyCode::Tab => return Some(Action::NextTab),
        KeyCode::BackTab => return Some(Action::PrevTab),
        KeyCode::Esc => return Some(Action::Escape),
        _ => {}
    }

    if tab == ViewTab::Editor {
        match key.code {
            KeyCode::Char(c) => Some(Action::EditorInsert(c)),
            KeyCode::Backspace => Some(Action::EditorBackspace),
            KeyCode::Delete => Some(Action::EditorDelete),
            KeyCode::Enter => Some(Action::EditorNewline),
            KeyCode::Left => Some(Action::EditorLeft),
            KeyCode::Right => Some(Action::EditorRight),
            KeyCode::Up => Some(Action::EditorUp),
            KeyCode::Down => Some(Action::EditorDown),
            KeyCode::Home => Some(Action::EditorHome),
            KeyCode::End => Some(Action::EditorEnd),
            _ => None,
        }
    } else {
        // Result tabs: scroll navigation only
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            _ => None,
        }
    }
}
