//! Provides the types used to print log messages to the console.

use std::fmt::Display;

use derive_new::new;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

impl Severity {
    /// Gets the bold, colored header string of the severity.
    fn header(self) -> &'static str {
        match self {
            Self::Error => "\x1B[1m\x1B[31m[error]:\x1B[0m",
            Self::Info => "\x1B[1m\x1B[32m[info]:\x1B[0m",
            Self::Warning => "\x1B[1m\x1B[33m[warning]:\x1B[0m",
        }
    }
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \x1B[1m{}\x1B[0m",
            self.severity.header(),
            self.display
        )
    }
}
