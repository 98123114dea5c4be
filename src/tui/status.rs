//! Status bar — displays compile state, endpoint, and cursor position.

/// Status information for the TUI status bar.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub endpoint: String,
    pub cursor_line: usize,
    pub cursor_column: usize,
    pub compile_status: CompileStatus,
}

/// Compilation status indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileStatus {
    Idle,
    Compiling,
    Ok,
    Error(String),
}

impl StatusInfo {
    /// Format the cursor position as "line:col" (1-based).
    pub fn cursor_display(&self) -> String {
        format!("{}:{}", self.cursor_line, self.cursor_column)
    }

    /// Short indicator for the compile state.
    pub fn status_display(&self) -> &str {
        match self.compile_status {
            CompileStatus::Idle => "--",
            CompileStatus::Compiling => "...",
            CompileStatus::Ok => "OK",
            CompileStatus::Error(_) => "ERR",
        }
    }

    /// Error detail, when the last compile failed.
    pub fn error_detail(&self) -> Option<&str> {
        match &self.compile_status {
            CompileStatus::Error(detail) => Some(detail),
            _ => None,
        }
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            cursor_line: 1,
            cursor_column: 1,
            compile_status: CompileStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_display_format() {
        let status = StatusInfo {
            cursor_line: 4,
            cursor_column: 12,
            ..Default::default()
        };
        assert_eq!(status.cursor_display(), "4:12");
    }

    #[test]
    fn status_display() {
        let mut status = StatusInfo::default();
        assert_eq!(status.status_display(), "--");
        status.compile_status = CompileStatus::Compiling;
        assert_eq!(status.status_display(), "...");
        status.compile_status = CompileStatus::Ok;
        assert_eq!(status.status_display(), "OK");
        status.compile_status = CompileStatus::Error("Erro na linha 3: token".into());
        assert_eq!(status.status_display(), "ERR");
    }

    #[test]
    fn error_detail_only_on_error() {
        let mut status = StatusInfo::default();
        assert_eq!(status.error_detail(), None);
        status.compile_status = CompileStatus::Error("boom".into());
        assert_eq!(status.error_detail(), Some("boom"));
    }
}
