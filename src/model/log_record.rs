//! Immutable log records captured from the logging subsystem.

use super::severity::Severity;

/// Raw event as handed over by the logging subsystem.
///
/// Carries the numeric severity and full origin path exactly as emitted.
/// Converted into a [`LogRecord`] once, at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogEvent {
    /// Raw severity code (see [`Severity::from_code`]).
    pub severity: i32,
    /// Origin file path, possibly including directories.
    pub file: String,
    /// Origin line number.
    pub line: u32,
    /// Free-text message.
    pub message: String,
    /// Timestamp/thread/context string.
    pub preamble: String,
    /// Assertion context, empty when absent.
    pub prefix: String,
}

/// One captured diagnostic event.
///
/// # Invariants
/// - `file_name` never contains a path separator.
/// - Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    severity: Severity,
    file_name: String,
    line: u32,
    message: String,
    preamble: String,
    prefix: String,
    source: String,
}

impl LogRecord {
    /// Build a record from a raw event. Never fails.
    pub fn from_event(event: LogEvent) -> Self {
        let file_name = strip_directory(&event.file).to_string();
        let source = format!("{}:{}", file_name, event.line);
        Self {
            severity: Severity::from_code(event.severity),
            file_name,
            line: event.line,
            message: event.message,
            preamble: event.preamble,
            prefix: event.prefix,
            source,
        }
    }

    /// Convenience constructor with empty preamble and prefix.
    pub fn new(severity: i32, file: &str, line: u32, message: impl Into<String>) -> Self {
        Self::from_event(LogEvent {
            severity,
            file: file.to_string(),
            line,
            message: message.into(),
            ..LogEvent::default()
        })
    }

    /// Level the record was emitted at.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Origin file name without directories.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Line in the origin file.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Formatted prefix the producer attached, empty if none.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Assertion or condition text, empty if none.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `"{file_name}:{line}"`, computed once at construction.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Strip everything up to and including the last `/` or `\`.
pub fn strip_directory(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
