//! Diagnostics reported back to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::forest::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding attached to a source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Stable, machine-readable identifier (e.g. `RCG001`).
    pub code: String,

    pub message: String,
    pub location: Location,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            location,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            location,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}[{}]: {}",
            self.location, self.severity, self.code, self.message
        )
    }
}
