//! Operator-facing progress log.
//!
//! Entries are echoed to stdout as they are recorded and kept, so callers
//! can inspect exactly what the operator saw.

use serde::{Deserialize, Serialize};

/// Log level for operator display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting level (for detail lines)
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render as printed on stdout.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠️ ",
            LogLevel::Error => "❌ ",
        };
        format!("{}{}{}", "   ".repeat(self.indent as usize), prefix, self.message)
    }
}

/// Collects progress entries, optionally echoing them.
#[derive(Debug, Default)]
pub struct ProgressLog {
    entries: Vec<LogEntry>,
    echo: bool,
}

impl ProgressLog {
    /// A log that prints every entry to stdout.
    pub fn stdout() -> Self {
        Self { entries: Vec::new(), echo: true }
    }

    /// A log that only records.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn log(&mut self, entry: LogEntry) {
        if self.echo {
            println!("{}", entry.render());
        }
        self.entries.push(entry);
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.log(LogEntry::info(msg));
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.log(LogEntry::success(msg));
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.log(LogEntry::warning(msg));
    }

    pub fn info_indent(&mut self, msg: impl Into<String>, indent: u8) {
        self.log(LogEntry::info(msg).with_indent(indent));
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_log_records() {
        let mut log = ProgressLog::silent();
        log.info("Cleaning data and renaming columns...");
        log.warning("3 rows dropped");

        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[1].level, LogLevel::Warning);
    }

    #[test]
    fn test_render_indent_and_prefix() {
        let entry = LogEntry::success("done").with_indent(1);
        assert_eq!(entry.render(), "   ✓ done");
        assert_eq!(LogEntry::info("plain").render(), "plain");
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_value(LogEntry::warning("x")).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["indent"], 0);
    }
}
