//! Log severity with a total mapping from raw numeric codes.

use std::fmt;

/// Severity of a captured log record.
///
/// The five named levels correspond to a fixed numeric table. Any other
/// raw code maps to [`Severity::Invalid`] so that ingestion never has to
/// reject a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Logging disabled (code 0).
    Off,
    /// Unrecoverable failure (code 1).
    Fatal,
    /// Error (code 2).
    Error,
    /// Warning (code 3).
    Warning,
    /// Informational (code 4).
    Info,
    /// Sentinel for codes outside the table.
    Invalid,
}

impl Severity {
    /// Raw code for [`Severity::Off`].
    pub const OFF_CODE: i32 = 0;
    /// Raw code for [`Severity::Fatal`].
    pub const FATAL_CODE: i32 = 1;
    /// Raw code for [`Severity::Error`].
    pub const ERROR_CODE: i32 = 2;
    /// Raw code for [`Severity::Warning`].
    pub const WARNING_CODE: i32 = 3;
    /// Raw code for [`Severity::Info`].
    pub const INFO_CODE: i32 = 4;

    /// Map a raw severity code to a severity. Total: never fails.
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::OFF_CODE => Self::Off,
            Self::FATAL_CODE => Self::Fatal,
            Self::ERROR_CODE => Self::Error,
            Self::WARNING_CODE => Self::Warning,
            Self::INFO_CODE => Self::Info,
            _ => Self::Invalid,
        }
    }

    /// Raw code of a named level, `None` for [`Severity::Invalid`].
    pub fn code(self) -> Option<i32> {
        match self {
            Self::Off => Some(Self::OFF_CODE),
            Self::Fatal => Some(Self::FATAL_CODE),
            Self::Error => Some(Self::ERROR_CODE),
            Self::Warning => Some(Self::WARNING_CODE),
            Self::Info => Some(Self::INFO_CODE),
            Self::Invalid => None,
        }
    }

    /// Upper-case label shown in the console's severity column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Invalid => "INVALID",
        }
    }

    /// Map a `tracing` level onto the five-level table.
    ///
    /// DEBUG and TRACE have no finer counterpart and land on INFO.
    pub fn code_for_tracing(level: &tracing::Level) -> i32 {
        match *level {
            tracing::Level::ERROR => Self::ERROR_CODE,
            tracing::Level::WARN => Self::WARNING_CODE,
            _ => Self::INFO_CODE,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
