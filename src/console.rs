// Activity log shown in the demo.
// Records widget events with timestamps and keeps the list scrolled to the latest entry.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Error, message)
    }

    fn new(level: ConsoleLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded activity log.
#[derive(Debug)]
pub struct Console {
    messages: Vec<ConsoleMessage>,
    capacity: usize,
    /// List state for message scrolling.
    pub list_state: ListState,
}

impl Default for Console {
    fn default() -> Self {
        Self::with_capacity(200)
    }
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: Vec::new(),
            capacity: capacity.max(1),
            list_state: ListState::default(),
        }
    }

    pub fn messages(&self) -> &[ConsoleMessage] {
        &self.messages
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::info(message));
    }

    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::warn(message));
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::error(message));
    }

    fn push(&mut self, message: ConsoleMessage) {
        match message.level {
            ConsoleLevel::Info => tracing::info!("{}", message.message),
            ConsoleLevel::Warn => tracing::warn!("{}", message.message),
            ConsoleLevel::Error => tracing::error!("{}", message.message),
        }
        self.messages.push(message);
        if self.messages.len() > self.capacity {
            let overflow = self.messages.len() - self.capacity;
            self.messages.drain(..overflow);
        }
        self.scroll_to_bottom();
    }

    /// Scroll message list to bottom.
    fn scroll_to_bottom(&mut self) {
        if !self.messages.is_empty() {
            self.list_state.select(Some(self.messages.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_scrolls_to_latest() {
        let mut console = Console::new();
        console.log_info("first");
        console.log_warn("second");
        assert_eq!(console.messages().len(), 2);
        assert_eq!(console.messages()[1].level, ConsoleLevel::Warn);
        assert_eq!(console.list_state.selected(), Some(1));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut console = Console::with_capacity(2);
        console.log_info("a");
        console.log_info("b");
        console.log_error("c");
        let texts: Vec<_> = console.messages().iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
        assert_eq!(console.list_state.selected(), Some(1));
    }
}
