//! Notification console — a scrollable log of compile activity.

/// Severity of a console notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

/// A log entry for the notification console.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

/// Notification console state. Holds a capped log plus at most one
/// transient "loading" line that is shown while a compile is in flight
/// and dismissed when it lands.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    entries: Vec<Notice>,
    max_entries: usize,
    loading: Option<String>,
}

impl Notifier {
    /// Create a new console with a maximum entry count.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
            loading: None,
        }
    }

    fn push(&mut self, level: Level, message: impl Into<String>) {
        self.entries.push(Notice {
            level,
            message: message.into(),
        });
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    /// Log an informational notice.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Level::Info, message);
    }

    /// Log a success notice.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Level::Success, message);
    }

    /// Log an error notice.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Level::Error, message);
    }

    /// Show the transient loading line, replacing any previous one.
    pub fn loading(&mut self, message: impl Into<String>) {
        self.loading = Some(message.into());
    }

    /// Dismiss the loading line if one is showing.
    pub fn dismiss_loading(&mut self) {
        self.loading = None;
    }

    /// The current loading line, if any.
    pub fn loading_message(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    /// Whether a loading line is showing.
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Get all entries (newest last). The loading line is not an entry.
    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    /// Clear the console.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.loading = None;
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the console is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
