//! Layout — result view tabs and cycling.

/// Which result view is showing next to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    Editor,
    Tokens,
    Tree,
}

impl ViewTab {
    /// Cycle to the next tab.
    pub fn next(self) -> Self {
        match self {
            Self::Editor => Self::Tokens,
            Self::Tokens => Self::Tree,
            Self::Tree => Self::Editor,
        }
    }

    /// Cycle to the previous tab.
    pub fn prev(self) -> Self {
        match self {
            Self::Editor => Self::Tree,
            Self::Tokens => Self::Editor,
            Self::Tree => Self::Tokens,
        }
    }

    /// Tab title for the chrome.
    pub fn title(self) -> &'static str {
        match self {
            Self::Editor => "Editor",
            Self::Tokens => "Tokens",
            Self::Tree => "Syntax Tree",
        }
    }

    /// All tabs in display order.
    pub fn all() -> [ViewTab; 3] {
        [Self::Editor, Self::Tokens, Self::Tree]
    }
}
