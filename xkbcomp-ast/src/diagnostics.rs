//! Collects the recoverable problems found while the tree is being built.
//!
//! Every report is also forwarded to the `log` facade, so a binary that
//! installs a logger sees them as they happen.

use std::fmt;

use log::{error, warn};
use xkbcomp_core::XkbError;

/// Position of the token that triggered a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match self.location {
            Some(loc) => write!(f, "{} at {}: {}", label, loc, self.message),
            None => write!(f, "{}: {}", label, self.message),
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>, location: Option<Location>) {
        let message = message.into();
        error!("{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            message,
            location,
        });
    }

    pub fn warning(&mut self, message: impl Into<String>, location: Option<Location>) {
        let message = message.into();
        warn!("{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message,
            location,
        });
    }

    /// Records a recoverable [`XkbError`] as an error diagnostic.
    pub fn report(&mut self, err: &XkbError, location: Option<Location>) {
        self.error(err.to_string(), location);
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.severity == Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.entries.iter().filter(|d| d.severity == Severity::Warning).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
